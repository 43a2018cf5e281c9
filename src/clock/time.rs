/// Wall-clock time shown by the face
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockTime {
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, String> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(format!(
                "invalid time {:02}:{:02}:{:02}",
                hours, minutes, seconds
            ));
        }
        Ok(Self { hours, minutes, seconds })
    }

    /// Seconds since midnight, wrapped to one day
    pub fn from_seconds(total: u64) -> Self {
        let s = total % 86_400;
        Self {
            hours: (s / 3600) as u8,
            minutes: ((s / 60) % 60) as u8,
            seconds: (s % 60) as u8,
        }
    }

    pub fn hours(&self) -> u8 { self.hours }

    pub fn minutes(&self) -> u8 { self.minutes }

    pub fn seconds(&self) -> u8 { self.seconds }

    /// `HHMMSS` as six decimal digits, zero padded
    pub fn digits(&self) -> [u8; 6] {
        [
            self.hours / 10,
            self.hours % 10,
            self.minutes / 10,
            self.minutes % 10,
            self.seconds / 10,
            self.seconds % 10,
        ]
    }
}
