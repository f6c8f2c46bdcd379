use std::time::Duration;

use anyhow::{anyhow, Result};

/// Parse a Go-style duration such as `24h`, `1h30m`, `90s` or `250ms`.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let s = input.trim();
    if s.is_empty() {
        return Err(anyhow!("empty duration"));
    }
    if s == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total = Duration::ZERO;
    let mut rest = s;
    while !rest.is_empty() {
        let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        if digits == 0 {
            return Err(anyhow!("expected a number at {rest:?}"));
        }
        let value: u64 = rest[..digits].parse()?;
        rest = &rest[digits..];

        let unit_len = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        rest = &rest[unit_len..];

        let part = match unit {
            "h" => Duration::from_secs(value.saturating_mul(3600)),
            "m" => Duration::from_secs(value.saturating_mul(60)),
            "s" => Duration::from_secs(value),
            "ms" => Duration::from_millis(value),
            "" => return Err(anyhow!("missing unit in duration {input:?}")),
            other => return Err(anyhow!("unknown unit {other:?} in duration {input:?}")),
        };
        total = total.saturating_add(part);
    }
    Ok(total)
}
