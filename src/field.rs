//! Date/time field table: how many digits each field takes, which values it
//! accepts, what follows it, and the text used to prompt for it.

/// Longest digit group of any field (the year).
pub const MAX_FIELD_DIGITS: usize = 4;

/// Fields of a date/time entry, in entry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DateTimeField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Done,
}

/// One row of the field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: DateTimeField,
    pub digits: usize,
    pub min: u16,
    pub max: u16,
    pub next: DateTimeField,
    /// Used in the "Invalid <name>" message.
    pub name: &'static str,
    /// Format hint shown in parentheses on every reprompt.
    pub hint: &'static str,
    pub prompt: &'static str,
}

impl FieldSpec {
    pub fn accepts(&self, value: u16) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub static FIELD_TABLE: [FieldSpec; 6] = [
    FieldSpec {
        field: DateTimeField::Year,
        digits: 4,
        min: 1900,
        max: 2099,
        next: DateTimeField::Month,
        name: "year",
        hint: "YYYY",
        prompt: "Type four digits for the current year (YYYY): ",
    },
    FieldSpec {
        field: DateTimeField::Month,
        digits: 2,
        min: 1,
        max: 12,
        next: DateTimeField::Day,
        name: "month",
        hint: "01-12",
        prompt: "Type two digits for the current month (01-12): ",
    },
    // Day is not checked against the month length.
    FieldSpec {
        field: DateTimeField::Day,
        digits: 2,
        min: 1,
        max: 31,
        next: DateTimeField::Hour,
        name: "day",
        hint: "01-31",
        prompt: "Type two digits for the current day (01-31): ",
    },
    FieldSpec {
        field: DateTimeField::Hour,
        digits: 2,
        min: 0,
        max: 23,
        next: DateTimeField::Minute,
        name: "hour",
        hint: "00-23",
        prompt: "Type two digits for the current hour (00-23): ",
    },
    FieldSpec {
        field: DateTimeField::Minute,
        digits: 2,
        min: 0,
        max: 59,
        next: DateTimeField::Second,
        name: "minutes",
        hint: "00-59",
        prompt: "Type two digits for the current minutes (00-59): ",
    },
    FieldSpec {
        field: DateTimeField::Second,
        digits: 2,
        min: 0,
        max: 59,
        next: DateTimeField::Done,
        name: "seconds",
        hint: "00-59",
        prompt: "Type two digits for the current seconds (00-59): ",
    },
];

impl DateTimeField {
    pub const FIRST: DateTimeField = DateTimeField::Year;

    /// Table row for this field. `Done` has none.
    pub fn spec(self) -> Option<&'static FieldSpec> {
        FIELD_TABLE.iter().find(|spec| spec.field == self)
    }

    pub fn name(self) -> &'static str {
        self.spec().map_or("done", |spec| spec.name)
    }

    pub fn is_done(self) -> bool {
        self == DateTimeField::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_walks_forward_to_done() {
        let mut field = DateTimeField::FIRST;
        let mut visited = 0;
        while let Some(spec) = field.spec() {
            assert_eq!(spec.field, field);
            field = spec.next;
            visited += 1;
        }
        assert_eq!(visited, FIELD_TABLE.len());
        assert!(field.is_done());
    }

    #[test]
    fn digit_targets() {
        for spec in FIELD_TABLE.iter() {
            let expected = if spec.field == DateTimeField::Year { 4 } else { 2 };
            assert_eq!(spec.digits, expected);
            assert!(spec.digits <= MAX_FIELD_DIGITS);
        }
    }

    #[test]
    fn ranges_are_inclusive() {
        let year = DateTimeField::Year.spec().unwrap();
        assert!(!year.accepts(1899));
        assert!(year.accepts(1900));
        assert!(year.accepts(2099));
        assert!(!year.accepts(2100));

        let hour = DateTimeField::Hour.spec().unwrap();
        assert!(hour.accepts(0));
        assert!(hour.accepts(23));
        assert!(!hour.accepts(24));

        let day = DateTimeField::Day.spec().unwrap();
        assert!(!day.accepts(0));
        assert!(day.accepts(31));
        assert!(!day.accepts(32));
    }

    #[test]
    fn done_has_no_spec() {
        assert!(DateTimeField::Done.spec().is_none());
        assert_eq!(DateTimeField::Done.name(), "done");
    }
}
