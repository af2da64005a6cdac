mod select_field;

pub use self::select_field::*;
