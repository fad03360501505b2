mod termcolor;

pub use self::termcolor::RenderTermcolor;
