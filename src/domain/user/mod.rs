//! Directory user domain

mod entity;
mod page;

pub use entity::{
    Coordinates, DateInfo, Identifier, Location, Login, Name, Picture, Postcode, Street, Timezone,
    UserRecord,
};
pub use page::{PageInfo, PageResponse};
