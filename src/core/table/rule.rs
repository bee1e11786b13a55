//! Horizontal rules for table rendering

use crate::data::constants::{BOTTOM_RULE, HLINE, MID_RULE, TOP_RULE};

/// Style of the horizontal rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "data-loading", derive(serde::Deserialize))]
#[cfg_attr(feature = "data-loading", serde(rename_all = "lowercase"))]
pub enum RuleStyle {
    /// Standard \hline everywhere
    #[default]
    Hline,
    /// Booktabs \toprule, \midrule and \bottomrule
    Booktabs,
}

/// Position of a rule within the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRule {
    /// Above the header row
    Top,
    /// Between the header block and the body
    Mid,
    /// Below the last body row
    Bottom,
}

impl RuleStyle {
    /// LaTeX command for a rule at the given position
    pub fn command(&self, rule: TableRule) -> &'static str {
        match (self, rule) {
            (RuleStyle::Hline, _) => HLINE,
            (RuleStyle::Booktabs, TableRule::Top) => TOP_RULE,
            (RuleStyle::Booktabs, TableRule::Mid) => MID_RULE,
            (RuleStyle::Booktabs, TableRule::Bottom) => BOTTOM_RULE,
        }
    }
}
