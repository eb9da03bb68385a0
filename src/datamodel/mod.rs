pub mod attr_value;
pub mod cursor;
pub mod page;
pub mod reading;

pub use attr_value::{AttrValue, RawRecord};
pub use cursor::ScanCursor;
pub use page::Page;
pub use reading::Reading;
