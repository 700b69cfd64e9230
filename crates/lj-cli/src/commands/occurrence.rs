//! Single occurrence window conversions.

use std::io::Write;

use anyhow::Result;
use lj_core::{EventOccurrence, TimeWindow};

use super::util::write_json;
use crate::{Config, OccurrenceAction};

pub fn run<W: Write>(
    writer: &mut W,
    action: &OccurrenceAction,
    config: &Config,
    pretty: bool,
) -> Result<()> {
    match *action {
        OccurrenceAction::Decode {
            start_before,
            end_after,
        } => {
            let occurrence =
                EventOccurrence::from_window(TimeWindow::new(start_before, end_after));
            write_json(writer, &occurrence, pretty)
        }
        OccurrenceAction::Encode {
            occurrence,
            time_unit,
            time_scale,
        } => {
            let window = EventOccurrence::new(occurrence, time_unit, time_scale)
                .to_window(config.window_encoding);
            write_json(writer, &window, pretty)
        }
    }
}
