//! Resolution affinity bonus between a candidate's source resolution and a
//! target resolution.
//!
//! Exact match → full bonus; same aspect ratio within tolerance → half bonus;
//! anything else, including malformed input, → 0. Symmetric in its arguments.

use lootlens_core::config::SelectorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Resolution {
    width: u32,
    height: u32,
}

/// Parse `"WxH"` with positive integer dimensions.
fn parse(raw: &str) -> Option<Resolution> {
    let (w, h) = raw.split_once(['x', 'X'])?;
    let width: u32 = w.trim().parse().ok()?;
    let height: u32 = h.trim().parse().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some(Resolution { width, height })
}

/// Bonus for how well two source resolutions agree.
pub fn bonus(a: Option<&str>, b: Option<&str>, config: &SelectorConfig) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };
    let (Some(ra), Some(rb)) = (parse(a), parse(b)) else {
        return 0.0;
    };

    if ra == rb {
        return config.resolution_bonus;
    }

    let aspect_a = ra.width as f64 / ra.height as f64;
    let aspect_b = rb.width as f64 / rb.height as f64;
    if (aspect_a - aspect_b).abs() <= config.aspect_tolerance {
        config.resolution_bonus / 2.0
    } else {
        0.0
    }
}
