//! Entity Models
//!
//! The seven record kinds managed by the entity gateway, plus the identity
//! account that backs login. All persisted identifiers are opaque strings
//! assigned server-side on first insert; an empty `id` on a save payload
//! means "insert new".

pub mod account;
pub mod announcement;
pub mod church_settings;
pub mod donation;
pub mod event;
pub mod family;
pub mod member;
pub mod profile;

pub use account::Account;
pub use announcement::{Announcement, AnnouncementTarget};
pub use church_settings::ChurchSettings;
pub use donation::{Donation, FundType, PaymentMethod};
pub use event::{Event, EventType};
pub use family::Family;
pub use member::{Gender, Member, MemberStatus};
pub use profile::{UserProfile, UserRole};
