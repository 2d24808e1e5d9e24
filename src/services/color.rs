use crate::config::ColorConfig;
use crate::models::Rgb;

const DIGITS: usize = 9;
const FILLER: char = '5';

/// Derive an avatar color from the CRC-32 of `text`.
///
/// The decimal checksum is cut or padded to nine digits, the digits are
/// interleaved into three groups (g, r, b) and each group is scaled from
/// 0..=999 to 0..=255 and capped at `config.max_channel`.
pub fn color_from_text(text: &str, config: &ColorConfig) -> Rgb {
    let checksum = crc32fast::hash(text.as_bytes());
    let digits = nine_digits(checksum);
    let colors = interleave(&digits);

    let g = component(&colors[0..3]);
    let r = component(&colors[3..6]);
    let b = component(&colors[6..9]);

    let rgb = Rgb::new(
        scale(r, config.max_channel),
        scale(g, config.max_channel),
        scale(b, config.max_channel),
    );
    tracing::trace!(checksum, %digits, %colors, ?rgb, "derived color");
    rgb
}

fn nine_digits(checksum: u32) -> String {
    let mut digits: String = checksum.to_string().chars().take(DIGITS).collect();
    while digits.len() < DIGITS {
        digits.push(FILLER);
    }
    digits
}

// c0 c3 c6 | c1 c4 c7 | c2 c5 c8
fn interleave(digits: &str) -> String {
    let c = digits.as_bytes();
    (0..3)
        .flat_map(|group| (0..3).map(move |i| c[group + 3 * i] as char))
        .collect()
}

fn component(digits: &str) -> u16 {
    digits
        .bytes()
        .fold(0, |acc, d| acc * 10 + u16::from(d - b'0'))
}

fn scale(component: u16, max_channel: u8) -> u8 {
    let channel = ((f64::from(component) / 1000.0) * 255.0).round();
    channel.min(f64::from(max_channel)) as u8
}
