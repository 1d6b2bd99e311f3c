use pigmix::ansi::Brush;

pub struct Config {
    pub interactive_mode: bool,
    pub brush: Brush,
}
