// models/src/medical/mod.rs

pub mod address;
pub mod allergy;
pub mod contact;
pub mod family_history;
pub mod insurance;
pub mod name;
pub mod patient;
pub mod social_history;
pub mod visit;

pub use address::Address;
pub use allergy::Allergy;
pub use contact::{ContactInfo, EmergencyContact, PhoneNumber};
pub use family_history::{FamilyHistory, FamilyMember, GeneticCondition};
pub use insurance::{InsuranceInfo, InsurancePlan};
pub use name::PersonName;
pub use patient::PatientRecord;
pub use social_history::SocialHistory;
pub use visit::{Diagnosis, MedicationEntry, VisitRecord, Vitals};
