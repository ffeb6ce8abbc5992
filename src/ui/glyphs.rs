#[derive(Clone, Copy, Debug)]
pub struct Glyphs {
    pub bar_full: &'static str,
    pub bar_empty: &'static str,
    pub play: &'static str,
    pub pause: &'static str,
    pub h_separator: &'static str,
}

pub fn select(fancy_requested: bool) -> Glyphs {
    if fancy_requested {
        fancy()
    } else {
        ascii()
    }
}

fn ascii() -> Glyphs {
    Glyphs {
        bar_full: "#",
        bar_empty: ".",
        play: ">",
        pause: "=",
        h_separator: "-",
    }
}

fn fancy() -> Glyphs {
    Glyphs {
        bar_full: "█",
        bar_empty: "░",
        play: "▶",
        pause: "⏸",
        h_separator: "─",
    }
}

/// Renders a horizontal bar of `width` cells filled to `fraction`.
pub fn bar(glyphs: &Glyphs, fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    let mut out = glyphs.bar_full.repeat(filled);
    out.push_str(&glyphs.bar_empty.repeat(width - filled));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar() {
        let g = select(false);
        assert_eq!(bar(&g, 0.5, 4), "##..");
        assert_eq!(bar(&g, 0.0, 3), "...");
        assert_eq!(bar(&g, 2.0, 3), "###");
    }

    #[test]
    fn test_fancy_bar_width() {
        let g = select(true);
        assert_eq!(bar(&g, 0.25, 8).chars().count(), 8);
    }
}
