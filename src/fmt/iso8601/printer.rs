use core::fmt::Write;

use crate::time::{OffsetDirection, TimeOfDay, TimezoneOffset};

#[derive(Clone, Copy, Debug)]
pub(super) struct TimePrinter {
    extended: bool,
}

impl TimePrinter {
    pub(super) const fn new() -> TimePrinter {
        TimePrinter { extended: true }
    }

    pub(super) const fn extended(self, yes: bool) -> TimePrinter {
        TimePrinter { extended: yes, ..self }
    }

    /// Formats the given time of day into the writer given.
    ///
    /// The offset is only written when its direction is specified, since
    /// a time string can't designate anything else.
    pub(super) fn print_time<W: Write>(
        &self,
        time: &TimeOfDay,
        mut wtr: W,
    ) -> core::fmt::Result {
        write!(wtr, "{:02}", time.hour())?;
        self.print_delimiter(&mut wtr)?;
        write!(wtr, "{:02}", time.minute())?;
        self.print_delimiter(&mut wtr)?;
        write!(wtr, "{:02}", time.second())?;
        let millisecond = time.millisecond();
        if millisecond != 0 {
            // Parsed back digit for digit, so the padding is only cosmetic.
            write!(wtr, ".{millisecond:03}")?;
        }
        let offset = time.offset();
        if offset.direction() != OffsetDirection::Unspecified {
            self.print_offset_digits(&offset, &mut wtr)?;
        }
        Ok(())
    }

    /// Formats the given offset as a designator into the writer given.
    ///
    /// This writes `Z` for an unspecified zero offset, and omits the sign
    /// of any other unspecified offset.
    pub(super) fn print_offset<W: Write>(
        &self,
        offset: &TimezoneOffset,
        mut wtr: W,
    ) -> core::fmt::Result {
        if *offset == TimezoneOffset::UNSPECIFIED {
            return wtr.write_str("Z");
        }
        self.print_offset_digits(offset, &mut wtr)
    }

    fn print_offset_digits<W: Write>(
        &self,
        offset: &TimezoneOffset,
        mut wtr: W,
    ) -> core::fmt::Result {
        match offset.direction() {
            OffsetDirection::Negative => wtr.write_str("-")?,
            OffsetDirection::Unspecified => {}
            OffsetDirection::Positive => wtr.write_str("+")?,
        }
        write!(wtr, "{:02}", offset.hour())?;
        self.print_delimiter(&mut wtr)?;
        write!(wtr, "{:02}", offset.minute())?;
        if offset.second() != 0 {
            self.print_delimiter(&mut wtr)?;
            write!(wtr, "{:02}", offset.second())?;
        }
        Ok(())
    }

    fn print_delimiter<W: Write>(&self, mut wtr: W) -> core::fmt::Result {
        if self.extended {
            wtr.write_str(":")?;
        }
        Ok(())
    }
}
