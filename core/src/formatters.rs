use serde::Serialize;

/// `MM:SS`, eller `HH:MM:SS` når timer > 0 eller `force_hours`.
/// Negative/NaN verdier gir nullvisning.
pub fn format_duration(seconds: f64, force_hours: bool) -> String {
    if seconds.is_nan() || seconds < 0.0 {
        return if force_hours { "00:00:00".into() } else { "00:00".into() };
    }
    let total = seconds.floor() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);

    if h > 0 || force_hours {
        format!("{h:02}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}

/// Intervall-etikett for beste-innsats-tabellen: "30 sec", "5 min", "1.5 min".
pub fn format_interval(seconds: u32) -> String {
    if seconds < 60 {
        format!("{seconds} sec")
    } else if seconds % 60 == 0 {
        format!("{} min", seconds / 60)
    } else {
        format!("{} min", seconds as f64 / 60.0)
    }
}

/// Fysiologiske landemerker på MMP-kurven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MmpLandmark {
    pub short: &'static str,
    pub name: &'static str,
}

pub fn mmp_landmark(duration: u32) -> Option<MmpLandmark> {
    let (short, name) = match duration {
        5 => ("5s", "N. Power"),
        60 => ("1m", "Anaerobic"),
        300 => ("5m", "VO2 Max"),
        600 => ("10m", "Sustained"),
        1200 => ("20m", "Threshold"),
        3600 => ("60m", "FTP"),
        _ => return None,
    };
    Some(MmpLandmark { short, name })
}
