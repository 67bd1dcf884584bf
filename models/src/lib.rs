// models/src/lib.rs

pub mod errors;
pub mod identifiers;
pub mod medical;

pub use errors::{ValidationError, ValidationResult};
pub use identifiers::PatientKey;
pub use medical::{
    Address, Allergy, ContactInfo, Diagnosis, EmergencyContact, FamilyHistory, FamilyMember,
    GeneticCondition, InsuranceInfo, InsurancePlan, MedicationEntry, PatientRecord, PersonName,
    PhoneNumber, SocialHistory, VisitRecord, Vitals,
};
