pub mod cards;
pub mod drafts;
pub mod events;
pub mod pack_counts;
pub mod packs;
pub mod seats;
pub mod users;

pub use cards::Entity as Cards;
pub use cards::Model as Card;
pub use drafts::Entity as Drafts;
pub use drafts::Model as Draft;
pub use events::Entity as Events;
pub use events::Model as Event;
pub use pack_counts::Entity as PackCounts;
pub use pack_counts::Model as PackCount;
pub use packs::Entity as Packs;
pub use packs::Model as Pack;
pub use seats::Entity as Seats;
pub use seats::Model as Seat;
pub use users::Entity as Users;
pub use users::Model as User;
