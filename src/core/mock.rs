//! Hard-coded sample data shown until the backend exposes these lists.

use crate::core::models::{Appointment, MedicalRecord, Owner, Pet};

fn s(value: &str) -> String {
    value.to_string()
}

pub fn owners() -> Vec<Owner> {
    vec![
        Owner {
            id: s("own-1"),
            first_name: s("María"),
            last_name: s("González"),
            email: s("maria.gonzalez@example.com"),
            phone: s("+1 555 0101"),
            address: s("12 Oak Street"),
        },
        Owner {
            id: s("own-2"),
            first_name: s("James"),
            last_name: s("Carter"),
            email: s("james.carter@example.com"),
            phone: s("+1 555 0144"),
            address: s("48 Elm Avenue"),
        },
        Owner {
            id: s("own-3"),
            first_name: s("Aiko"),
            last_name: s("Tanaka"),
            email: s("aiko.tanaka@example.com"),
            phone: s("+1 555 0199"),
            address: s("7 Birch Road"),
        },
    ]
}

pub fn pets() -> Vec<Pet> {
    vec![
        Pet {
            id: s("pet-1"),
            name: s("Luna"),
            species: s("Dog"),
            breed: s("Labrador"),
            birth_date: s("2019-04-12"),
            owner_name: s("María González"),
        },
        Pet {
            id: s("pet-2"),
            name: s("Milo"),
            species: s("Cat"),
            breed: s("Siamese"),
            birth_date: s("2021-09-03"),
            owner_name: s("James Carter"),
        },
        Pet {
            id: s("pet-3"),
            name: s("Kiwi"),
            species: s("Bird"),
            breed: s("Budgerigar"),
            birth_date: s("2022-01-20"),
            owner_name: s("Aiko Tanaka"),
        },
        Pet {
            id: s("pet-4"),
            name: s("Rocky"),
            species: s("Dog"),
            breed: s("Beagle"),
            birth_date: s("2017-11-30"),
            owner_name: s("María González"),
        },
    ]
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: s("apt-1"),
            pet_name: s("Luna"),
            date: s("2026-10-20"),
            time: s("09:30"),
            reason: s("Annual vaccination"),
            status: s("Confirmed"),
        },
        Appointment {
            id: s("apt-2"),
            pet_name: s("Milo"),
            date: s("2026-10-20"),
            time: s("11:00"),
            reason: s("Dental check"),
            status: s("Scheduled"),
        },
        Appointment {
            id: s("apt-3"),
            pet_name: s("Rocky"),
            date: s("2026-10-22"),
            time: s("15:15"),
            reason: s("Limping on front leg"),
            status: s("Scheduled"),
        },
    ]
}

pub fn medical_history() -> Vec<MedicalRecord> {
    vec![
        MedicalRecord {
            id: s("med-1"),
            pet_name: s("Luna"),
            date: s("2025-10-18"),
            diagnosis: s("Healthy"),
            treatment: s("Rabies booster"),
            veterinarian: s("Dr. Patel"),
        },
        MedicalRecord {
            id: s("med-2"),
            pet_name: s("Rocky"),
            date: s("2026-03-02"),
            diagnosis: s("Otitis externa"),
            treatment: s("Ear drops, 10 days"),
            veterinarian: s("Dr. Okafor"),
        },
        MedicalRecord {
            id: s("med-3"),
            pet_name: s("Luna"),
            date: s("2026-06-14"),
            diagnosis: s("Mild dermatitis"),
            treatment: s("Medicated shampoo"),
            veterinarian: s("Dr. Patel"),
        },
    ]
}

/// Placeholder analytics for the dashboard overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub owners: usize,
    pub pets: usize,
    pub appointments_on_first_day: usize,
    pub pending_appointments: usize,
}

impl DashboardStats {
    pub fn compute(owners: &[Owner], pets: &[Pet], appointments: &[Appointment]) -> Self {
        let first_day = appointments.iter().map(|a| a.date.as_str()).min();
        Self {
            owners: owners.len(),
            pets: pets.len(),
            appointments_on_first_day: appointments
                .iter()
                .filter(|a| Some(a.date.as_str()) == first_day)
                .count(),
            pending_appointments: appointments
                .iter()
                .filter(|a| a.status == "Scheduled")
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::editor::Record;
    use std::collections::HashSet;

    #[test]
    fn test_mock_keys_are_unique() {
        let keys: HashSet<_> = pets().iter().map(|p| p.key().to_string()).collect();
        assert_eq!(keys.len(), pets().len());
        let keys: HashSet<_> = owners().iter().map(|o| o.key().to_string()).collect();
        assert_eq!(keys.len(), owners().len());
    }

    #[test]
    fn test_dashboard_stats() {
        let stats = DashboardStats::compute(&owners(), &pets(), &appointments());
        assert_eq!(
            stats,
            DashboardStats {
                owners: 3,
                pets: 4,
                appointments_on_first_day: 2,
                pending_appointments: 2,
            }
        );
    }

    #[test]
    fn test_dashboard_stats_empty() {
        let stats = DashboardStats::compute(&[], &[], &[]);
        assert_eq!(stats.appointments_on_first_day, 0);
        assert_eq!(stats.pending_appointments, 0);
    }
}
