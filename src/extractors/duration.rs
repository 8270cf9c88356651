use log::debug;

/// Convert an ISO 8601 duration into a short label.
///
/// Only single-unit hour or minute durations are understood:
/// `PT2H` -> `2 hr`, `PT45M` -> `45 min`. Everything else, combined
/// durations such as `PT1H30M` included, gives an empty string.
pub fn format_duration(iso: &str) -> String {
    let Some(rest) = iso.strip_prefix("PT") else {
        debug!("format_duration: {:?} has no PT prefix", iso);
        return String::new();
    };

    let mut digits = String::new();
    let mut chars = rest.chars();
    while let Some(c) = chars.next() {
        let unit = match c {
            '0'..='9' => {
                digits.push(c);
                continue;
            }
            'H' => "hr",
            'M' => "min",
            _ => break,
        };

        if !digits.is_empty() && chars.as_str().is_empty() {
            return format!("{digits} {unit}");
        }
        break;
    }

    debug!("format_duration: unsupported duration {:?}", iso);
    String::new()
}
