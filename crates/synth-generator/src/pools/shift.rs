//! The three fixed shifts.

use synth_core::{ShiftRecord, ShiftType};

/// The shift table is fixed and makes no random draws.
pub fn fixed_shifts() -> Vec<ShiftRecord> {
    vec![
        ShiftRecord {
            id: "SH-1".to_string(),
            name: ShiftType::Morning,
            start_time: "06:00".to_string(),
            end_time: "14:00".to_string(),
        },
        ShiftRecord {
            id: "SH-2".to_string(),
            name: ShiftType::Evening,
            start_time: "14:00".to_string(),
            end_time: "22:00".to_string(),
        },
        ShiftRecord {
            id: "SH-3".to_string(),
            name: ShiftType::Night,
            start_time: "22:00".to_string(),
            end_time: "06:00".to_string(),
        },
    ]
}
