mod alert;
mod form;
mod image;
mod util;

pub use self::alert::*;
pub use self::form::*;
pub use self::image::*;
pub use self::util::*;
