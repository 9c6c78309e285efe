//! Race dictionary filters: strip-mathrace-only, reorder-lists,
//! strip-milliseconds and strip-trailing-zero-bonus.

use crate::files;
use mathrace_canonical::{
    reorder_lists, strip_mathrace_only_value, strip_milliseconds, strip_trailing_zero_bonus,
    RaceDict,
};
use serde_json::Value;

/// The filter to apply.
#[derive(Debug, Clone, Copy)]
pub enum Normalization {
    StripMathraceOnly,
    ReorderLists,
    StripMilliseconds,
    StripTrailingZeroBonus,
}

pub fn run(
    input: Option<String>,
    output: Option<String>,
    normalization: Normalization,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = files::read_input(input.as_deref())?;

    // Works on raw JSON so that mathrace_id keys from the race database are dropped too.
    let mut normalized = if let Normalization::StripMathraceOnly = normalization {
        let mut value: Value =
            serde_json::from_str(&json).map_err(|e| format!("Invalid JSON: {}", e))?;
        strip_mathrace_only_value(&mut value);
        serde_json::to_string_pretty(&value)?
    } else {
        let mut race: RaceDict = serde_json::from_str(&json)
            .map_err(|e| format!("Invalid race dictionary: {}", e))?;
        match normalization {
            Normalization::ReorderLists => reorder_lists(&mut race),
            Normalization::StripMilliseconds => strip_milliseconds(&mut race),
            Normalization::StripTrailingZeroBonus => strip_trailing_zero_bonus(&mut race),
            Normalization::StripMathraceOnly => {}
        }
        serde_json::to_string_pretty(&race)?
    };
    normalized.push('\n');
    files::write_output(output.as_deref(), &normalized)?;
    Ok(())
}
