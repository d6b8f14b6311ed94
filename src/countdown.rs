// 2026-09-03 09:00 IST (03:30 UTC).
pub const EVENT_START_UNIX_MS: i64 = 1_788_406_200_000;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

pub const DISPLAY_FIELD_IDS: [&str; 4] = ["days", "hours", "minutes", "seconds"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    pub fn from_remaining_ms(remaining_ms: i64) -> Self {
        if remaining_ms <= 0 {
            return Self::default();
        }

        Self {
            days: remaining_ms / MS_PER_DAY,
            hours: (remaining_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (remaining_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (remaining_ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    pub fn between(target_ms: i64, now_ms: i64) -> Self {
        Self::from_remaining_ms(target_ms.saturating_sub(now_ms))
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        *self == Self::default()
    }

    pub fn display_fields(&self) -> [String; 4] {
        [self.days, self.hours, self.minutes, self.seconds].map(|value| format!("{value:02}"))
    }
}

pub trait CountdownFields {
    fn render(&self, values: &[String; 4]);
}

/// One countdown tick. A display that could not be located fails only this
/// tick; the caller keeps its schedule running.
pub fn tick<D: CountdownFields>(
    display: Result<D, &'static str>,
    target_ms: i64,
    now_ms: i64,
) -> Result<CountdownParts, &'static str> {
    let display = display?;
    let parts = CountdownParts::between(target_ms, now_ms);
    display.render(&parts.display_fields());
    Ok(parts)
}
