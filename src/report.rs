//! Plan rendering for the console and for machines.

use std::fmt::Write;

use crate::error::DispatchError;
use crate::model::Dispatch;

pub const TABLE_HEADER: &str = "order   truck   tons   pickup  eta  score";
const SEPARATOR_WIDTH: usize = 46;

/// Fixed-width table: header, one line of dashes, one row per dispatch.
pub fn render_table(dispatches: &[Dispatch]) -> String {
    let mut out = String::new();
    out.push_str(TABLE_HEADER);
    out.push('\n');
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');

    for d in dispatches {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{:<7} {:<7} {:<5} {:<7} {:<4} {:<5.1}",
            d.order_id, d.truck_id, d.assigned_tons, d.pickup_hour, d.eta_hour, d.delivery_score
        );
    }

    out
}

pub fn render_json(dispatches: &[Dispatch]) -> Result<String, DispatchError> {
    Ok(serde_json::to_string_pretty(dispatches)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch() -> Dispatch {
        Dispatch {
            order_id: "O-101".to_string(),
            truck_id: "T-03".to_string(),
            assigned_tons: 20,
            pickup_hour: 1,
            eta_hour: 4,
            delivery_score: 494.0,
        }
    }

    #[test]
    fn test_table_layout() {
        let table = render_table(&[dispatch()]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], TABLE_HEADER);
        assert_eq!(lines[1], "-".repeat(46));
        assert_eq!(lines[2], "O-101   T-03    20    1       4    494.0");
    }

    #[test]
    fn test_empty_plan_has_header_only() {
        let table = render_table(&[]);
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_json_fields() {
        let json = render_json(&[dispatch()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["order_id"], "O-101");
        assert_eq!(value[0]["eta_hour"], 4);
        assert_eq!(value[0]["delivery_score"], 494.0);
    }
}
