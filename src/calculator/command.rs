use super::operator::Operator;

/// A discrete input understood by the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// A digit `0`-`9` or the decimal point.
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    Percent,
    ToggleSign,
    OpenHistory,
    CloseHistory,
    ClearHistory,
}
