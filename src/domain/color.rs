use serde::Deserialize;
use std::fmt::{self, Display, Formatter};

/// Call-to-action colour with its fixed (background, text) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonColor {
    #[default]
    Blue,
    SuccessGreen,
    WarningOrange,
    DangerRed,
}

impl ButtonColor {
    pub const ALL: [ButtonColor; 4] = [
        ButtonColor::Blue,
        ButtonColor::SuccessGreen,
        ButtonColor::WarningOrange,
        ButtonColor::DangerRed,
    ];

    /// Unrecognised names resolve to blue.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Success Green" => ButtonColor::SuccessGreen,
            "Warning Orange" => ButtonColor::WarningOrange,
            "Danger Red" => ButtonColor::DangerRed,
            _ => ButtonColor::Blue,
        }
    }

    /// Migration path for records that stored the inline style string rather
    /// than the colour name. Tokens are tried green, orange, red, then default.
    pub fn from_legacy_style(style: &str) -> Self {
        [
            ButtonColor::SuccessGreen,
            ButtonColor::WarningOrange,
            ButtonColor::DangerRed,
        ]
        .into_iter()
        .find(|color| style.contains(&format!("background-color: {}", color.background())))
        .unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        match self {
            ButtonColor::Blue => "Blue",
            ButtonColor::SuccessGreen => "Success Green",
            ButtonColor::WarningOrange => "Warning Orange",
            ButtonColor::DangerRed => "Danger Red",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            ButtonColor::Blue => "#007bff",
            ButtonColor::SuccessGreen => "#28a745",
            ButtonColor::WarningOrange => "#fd7e14",
            ButtonColor::DangerRed => "#dc3545",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            ButtonColor::Blue => "#212529",
            ButtonColor::SuccessGreen | ButtonColor::WarningOrange | ButtonColor::DangerRed => {
                "#ffffff"
            }
        }
    }

    /// Inline style string in the legacy stored form.
    pub fn style(&self) -> String {
        format!(
            "background-color: {}; color: {};",
            self.background(),
            self.text()
        )
    }
}

/// Style string for a colour name, blue when the name is unknown.
pub fn color_style_for(name: &str) -> String {
    ButtonColor::from_name(name).style()
}

/// Header band colour, quantised to 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HeaderColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl HeaderColor {
    pub const DEFAULT: HeaderColor = HeaderColor {
        red: 0x00,
        green: 0x7B,
        blue: 0xFF,
    };

    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Channels are fractions in `[0, 1]`, clamped, then truncated (not
    /// rounded) to 8 bits so that re-rendering stays byte-identical with
    /// documents generated earlier.
    pub fn from_fractions(red: f64, green: f64, blue: f64) -> Self {
        fn quantise(channel: f64) -> u8 {
            if channel.is_nan() {
                return 0;
            }
            (channel.clamp(0.0, 1.0) * 255.0).floor() as u8
        }
        Self {
            red: quantise(red),
            green: quantise(green),
            blue: quantise(blue),
        }
    }

    /// Accepts `#RRGGBB` or `RRGGBB`, any case.
    pub fn parse_hex(s: &str) -> Result<Self, String> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid header color: '{s}' is not a #RRGGBB value."));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| format!("Invalid header color: {e}"))
        };
        Ok(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl Default for HeaderColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for HeaderColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
