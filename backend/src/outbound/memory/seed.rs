//! Example roster loaded into the in-memory store at startup.

use chrono::NaiveDate;
use tracing::warn;

use crate::domain::{User, UserId};

type SeedRow = (i64, &'static str, &'static str, &'static str, bool, (i32, u32, u32));

const EXAMPLE_USERS: &[SeedRow] = &[
    (1, "Peter", "Loew", "ploew@example.com", true, (1985, 3, 14)),
    (2, "Benjamin Franklin", "Gates", "bfgates@example.com", true, (1990, 7, 2)),
    (3, "Castor", "Troy", "ctroy@example.com", false, (1972, 11, 23)),
    (4, "Memphis", "Raines", "mraines@example.com", true, (1968, 1, 30)),
    (5, "Stanley", "Goodspeed", "sgodspeed@example.com", true, (1979, 6, 18)),
    (6, "H.I.", "McDunnough", "himcdunnough@example.com", true, (1983, 9, 5)),
    (7, "Cameron", "Poe", "cpoe@example.com", false, (1964, 4, 12)),
    (8, "Edward", "Malus", "emalus@example.com", false, (1959, 12, 1)),
    (9, "Damon", "Macready", "dmacready@example.com", false, (1975, 8, 27)),
    (10, "Johnny", "Blaze", "jblaze@example.com", true, (1988, 2, 29)),
    (11, "Robin", "Feld", "rfeld@example.com", true, (1993, 10, 9)),
];

/// Users seeded when `seed_users` is enabled.
pub fn example_users() -> Vec<User> {
    EXAMPLE_USERS
        .iter()
        .filter_map(|&(id, forename, surname, email, is_active, (y, m, d))| {
            let Some(date_of_birth) = NaiveDate::from_ymd_opt(y, m, d) else {
                warn!(user_id = id, "skipping example user with invalid date of birth");
                return None;
            };
            Some(User {
                id: UserId::new(id),
                forename: forename.to_owned(),
                surname: surname.to_owned(),
                email: email.to_owned(),
                is_active,
                date_of_birth,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_example_row_becomes_a_user() {
        assert_eq!(example_users().len(), EXAMPLE_USERS.len());
    }

    #[test]
    fn example_ids_are_unique() {
        let users = example_users();
        let ids: HashSet<UserId> = users.iter().map(|user| user.id).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn roster_mixes_active_and_inactive_users() {
        let users = example_users();
        assert!(users.iter().any(|user| user.is_active));
        assert!(users.iter().any(|user| !user.is_active));
    }
}
