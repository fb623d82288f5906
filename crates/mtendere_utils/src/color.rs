use colored::*;

pub struct LogColors {}

impl LogColors {
    pub fn blue(text: &str) -> String {
        // use #1d4ed8 as blue color
        let blue = Color::TrueColor {
            r: 29,
            g: 78,
            b: 216,
        };

        text.color(blue).to_string()
    }

    pub fn green(text: &str) -> String {
        // use #04cd9b as green color
        let green = Color::TrueColor {
            r: 4,
            g: 205,
            b: 155,
        };

        text.color(green).to_string()
    }

    pub fn alert(text: &str) -> String {
        // use #FF0000 as red color
        let red = Color::TrueColor { r: 255, g: 0, b: 0 };

        text.color(red).to_string()
    }
}
