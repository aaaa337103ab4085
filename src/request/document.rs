//! IMS 2.0 waveform request for one station and one day.

use std::fmt;

use crate::reading::CalendarDate;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Station identifier. Any string is accepted.
pub struct StationCode(String);

impl StationCode {
    pub fn new(code: impl Into<String>) -> Self {
        StationCode(code.into())
    }

    pub fn upper(&self) -> String {
        self.0.to_uppercase()
    }

    pub fn lower(&self) -> String {
        self.0.to_lowercase()
    }
}

impl From<&str> for StationCode {
    fn from(code: &str) -> Self {
        StationCode::new(code)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct RequestDocument<'a> {
    pub station: &'a StationCode,
    pub date: CalendarDate,
}

impl<'a> RequestDocument<'a> {
    pub fn new(station: &'a StationCode, date: CalendarDate) -> Self {
        RequestDocument { station, date }
    }

    pub fn file_stem(&self) -> String {
        let (year, month, day) = self.date.path_parts();
        format!("{}_{}_{}_{}", self.station.upper(), year, month, day)
    }

    pub fn file_name(&self) -> String {
        format!("{}.req", self.file_stem())
    }

    /// Name of the MiniSEED file the client writes the response to.
    pub fn output_name(&self) -> String {
        format!("{}.mseed", self.file_stem())
    }

    pub fn render(&self) -> String {
        let upper = self.station.upper();
        let date = self.date;

        [
            "begin ims2.0".to_string(),
            "msg_type request".to_string(),
            format!("msg_id mseed_{}", self.station.lower()),
            format!("time {} 00:00:00 to {} 23:59:59", date, date),
            format!("sta_list {}", upper),
            "chan_list BDF".to_string(),
            "waveform ims2.0:ms_st2_512".to_string(),
            "stop".to_string(),
        ]
        .iter()
        .map(|line| format!("{}\n", line))
        .collect()
    }
}

// -- Tests -------------------------------------------------------------------
