//! The classic full-screen face: time centered on a black background,
//! weather beneath it, and optional date and battery lines.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Alignment,
};

use crate::battery::BatteryState;
use crate::clock::{month_abbrev, ClockSample};
use crate::display::{
    fonts::{self, FontResource},
    RegionStyle, TextRegion, SCREEN_H, SCREEN_W,
};
use crate::weather::WeatherReport;

use super::FaceConfig;

// Region rows, top to bottom.
const DATE_Y: i32 = 18;
const DATE_H: u32 = 22;
const TIME_Y: i32 = 66;
const TIME_H: u32 = 44;
const WEATHER_Y: i32 = 150;
const WEATHER_H: u32 = 26;
const BATTERY_Y: i32 = 206;
const BATTERY_H: u32 = 18;
const MARGIN: u32 = 8;

// Text buffer capacities per region.
const TIME_BUF: usize = 8;
const DATE_BUF: usize = 16;
const BATTERY_BUF: usize = 8;
const WEATHER_BUF: usize = 32;

// Blue accent on a black face.
const FACE_BG: Rgb565 = Rgb565::BLACK;
const FACE_FG: Rgb565 = Rgb565::new(0, 21, 31);

/// The watchface: one text region per displayed field.
///
/// Regions are created with placeholder text at window load and dropped as
/// a whole at unload; release is scoped, so an aborted load cannot leak.
pub struct ClassicFace {
    time: TextRegion<TIME_BUF>,
    date: Option<TextRegion<DATE_BUF>>,
    battery: Option<TextRegion<BATTERY_BUF>>,
    weather: TextRegion<WEATHER_BUF>,
}

impl ClassicFace {
    /// Build every region for the configured variant.
    pub fn new(config: FaceConfig) -> Self {
        Self {
            time: TextRegion::new(
                row(TIME_Y, TIME_H),
                RegionStyle {
                    foreground: FACE_FG,
                    background: FACE_BG,
                    alignment: Alignment::Center,
                    font: fonts::custom(FontResource::Sans24),
                },
                "00:00",
            ),
            date: config.show_date.then(|| {
                TextRegion::new(
                    row(DATE_Y, DATE_H),
                    RegionStyle {
                        foreground: FACE_FG,
                        background: FACE_BG,
                        alignment: Alignment::Center,
                        font: fonts::system(fonts::KEY_GOTHIC_18)
                            .unwrap_or(fonts::custom(FontResource::Sans18)),
                    },
                    "Mon 01 Jan",
                )
            }),
            battery: config.show_battery.then(|| {
                TextRegion::new(
                    Rectangle::new(
                        Point::new(0, BATTERY_Y),
                        Size::new(SCREEN_W - MARGIN, BATTERY_H),
                    ),
                    RegionStyle {
                        foreground: FACE_FG,
                        background: FACE_BG,
                        alignment: Alignment::Right,
                        font: fonts::system(fonts::KEY_GOTHIC_14)
                            .unwrap_or(fonts::custom(FontResource::Sans18)),
                    },
                    "--",
                )
            }),
            weather: TextRegion::new(
                row(WEATHER_Y, WEATHER_H),
                RegionStyle {
                    foreground: FACE_FG,
                    background: FACE_BG,
                    alignment: Alignment::Center,
                    font: fonts::custom(FontResource::Sans18),
                },
                "LOADING...",
            ),
        }
    }

    /// Refresh the time line, and the date line when shown.
    pub fn update_time(&mut self, sample: &ClockSample) {
        self.time
            .set_text(format_args!("{:02}:{:02}", sample.hour12(), sample.minute));

        if let Some(date) = &mut self.date {
            date.set_text(format_args!(
                "{} {:02} {}",
                sample.weekday,
                sample.day,
                month_abbrev(sample.month0)
            ));
        }
    }

    /// Refresh the battery line when shown.
    pub fn update_battery(&mut self, state: BatteryState) {
        if let Some(battery) = &mut self.battery {
            battery.set_text(format_args!("{} %", state.percent()));
        }
    }

    /// Refresh the weather line.
    ///
    /// Conditions are cut at whatever the temperature leaves of the region
    /// buffer, never past a character boundary.
    pub fn update_weather(&mut self, report: &WeatherReport) {
        let mut temp_buf = [0u8; 12];
        let temp = match format_no_std::show(
            &mut temp_buf,
            format_args!("{}", report.temperature_f),
        ) {
            Ok(temp) => temp,
            Err(_) => return,
        };

        let available = WEATHER_BUF - temp.len() - " F, ".len();
        self.weather.set_text(format_args!(
            "{} F, {}",
            temp,
            truncated(&report.conditions, available)
        ));
    }

    pub fn time_text(&self) -> &str {
        self.time.text()
    }

    pub fn date_text(&self) -> Option<&str> {
        self.date.as_ref().map(|region| region.text())
    }

    pub fn battery_text(&self) -> Option<&str> {
        self.battery.as_ref().map(|region| region.text())
    }

    pub fn weather_text(&self) -> &str {
        self.weather.text()
    }

    /// Paint the face background, then every region.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        Rectangle::new(Point::zero(), Size::new(SCREEN_W, SCREEN_H))
            .into_styled(PrimitiveStyle::with_fill(FACE_BG))
            .draw(target)?;

        self.time.draw(target)?;
        if let Some(date) = &self.date {
            date.draw(target)?;
        }
        if let Some(battery) = &self.battery {
            battery.draw(target)?;
        }
        self.weather.draw(target)?;
        Ok(())
    }
}

fn row(y: i32, height: u32) -> Rectangle {
    Rectangle::new(Point::new(0, y), Size::new(SCREEN_W, height))
}

/// Longest prefix of `s` that fits `max` bytes without splitting a character.
fn truncated(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::Dict;
    use crate::weather::{KEY_CONDITIONS, KEY_TEMPERATURE};
    use chrono::Weekday;
    use embedded_graphics::Pixel;

    fn sample(hour: u8, minute: u8) -> ClockSample {
        ClockSample {
            hour,
            minute,
            weekday: Weekday::Thu,
            day: 7,
            month0: 2,
        }
    }

    fn report(temperature_f: i32, conditions: &str) -> WeatherReport {
        let mut dict = Dict::new();
        dict.push_int(KEY_TEMPERATURE, temperature_f).unwrap();
        dict.push_text(KEY_CONDITIONS, conditions).unwrap();
        WeatherReport::from_dict(&dict).unwrap()
    }

    #[test]
    fn placeholders_before_first_refresh() {
        let face = ClassicFace::new(FaceConfig::default());
        assert_eq!(face.time_text(), "00:00");
        assert_eq!(face.date_text(), Some("Mon 01 Jan"));
        assert_eq!(face.battery_text(), Some("--"));
        assert_eq!(face.weather_text(), "LOADING...");
    }

    #[test]
    fn time_is_zero_padded_twelve_hour() {
        let mut face = ClassicFace::new(FaceConfig::default());

        face.update_time(&sample(0, 0));
        assert_eq!(face.time_text(), "12:00");

        face.update_time(&sample(13, 5));
        assert_eq!(face.time_text(), "01:05");

        face.update_time(&sample(23, 59));
        assert_eq!(face.time_text(), "11:59");
    }

    #[test]
    fn date_reads_weekday_day_month() {
        let mut face = ClassicFace::new(FaceConfig::default());
        face.update_time(&sample(9, 30));
        assert_eq!(face.date_text(), Some("Thu 07 Mar"));
    }

    #[test]
    fn every_battery_percent_renders_with_one_space() {
        let mut face = ClassicFace::new(FaceConfig::default());
        for percent in 0..=100u8 {
            face.update_battery(BatteryState::new(percent));

            let mut buf = [0u8; 8];
            let expected =
                format_no_std::show(&mut buf, format_args!("{} %", percent)).unwrap();
            assert_eq!(face.battery_text(), Some(expected));
        }
    }

    #[test]
    fn weather_reads_temperature_and_conditions() {
        let mut face = ClassicFace::new(FaceConfig::default());
        face.update_weather(&report(72, "Cloudy"));
        assert_eq!(face.weather_text(), "72 F, Cloudy");
    }

    #[test]
    fn long_conditions_are_cut_to_the_buffer() {
        let mut face = ClassicFace::new(FaceConfig::default());
        let conditions = "abcdefghijklmnopqrstuvwxyzabcde";
        assert_eq!(conditions.len(), 31);

        face.update_weather(&report(100, conditions));
        let text = face.weather_text();
        assert_eq!(text.len(), WEATHER_BUF);
        assert_eq!(text, "100 F, abcdefghijklmnopqrstuvwxy");
    }

    #[test]
    fn minimal_variant_has_no_date_or_battery() {
        let mut face = ClassicFace::new(FaceConfig {
            show_date: false,
            show_battery: false,
        });
        assert_eq!(face.date_text(), None);
        assert_eq!(face.battery_text(), None);

        // Updates for hidden regions are no-ops, not panics.
        face.update_time(&sample(8, 15));
        face.update_battery(BatteryState::new(50));
        assert_eq!(face.time_text(), "08:15");
    }

    struct CountingTarget {
        pixels: u32,
    }

    impl OriginDimensions for CountingTarget {
        fn size(&self) -> Size {
            Size::new(SCREEN_W, SCREEN_H)
        }
    }

    impl DrawTarget for CountingTarget {
        type Color = Rgb565;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            self.pixels += pixels.into_iter().count() as u32;
            Ok(())
        }
    }

    #[test]
    fn full_face_draws_every_region() {
        let mut face = ClassicFace::new(FaceConfig::default());
        face.update_time(&sample(10, 30));
        face.update_battery(BatteryState::new(80));
        face.update_weather(&report(72, "Cloudy"));

        let mut target = CountingTarget { pixels: 0 };
        face.draw(&mut target).unwrap();
        // Background fill alone covers the panel once.
        assert!(target.pixels >= SCREEN_W * SCREEN_H);
    }
}
