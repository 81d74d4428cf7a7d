//! Moteur de rotation : fonctions pures de `(roster, ancre, date)`.

use crate::error::RotaError;
use crate::model::{Assignment, DateAnchor, Roster, ROSTER_SIZE};
use chrono::NaiveDate;

/// Jours entiers écoulés entre l'ancre et `target` ; 0 si `target` précède l'ancre.
pub fn days_since(anchor: DateAnchor, target: NaiveDate) -> i64 {
    target
        .signed_duration_since(anchor.date())
        .num_days()
        .max(0)
}

/// Décalage circulaire vers la gauche de `n` positions (`n` peut être négatif).
///
/// L'élément d'indice `n mod 30` devient l'indice 0.
pub fn rotate_left<S: AsRef<str>>(names: &[S], n: i64) -> Result<Assignment, RotaError> {
    if names.len() != ROSTER_SIZE {
        return Err(RotaError::InvalidRosterSize { len: names.len() });
    }
    let k = n.rem_euclid(ROSTER_SIZE as i64) as usize;
    let rotated = names[k..]
        .iter()
        .chain(&names[..k])
        .map(|name| name.as_ref().to_string())
        .collect();
    Ok(Assignment::new(k, rotated))
}

/// Affectation du jour `target` pour un roster validé.
pub fn assignment_for(
    roster: &Roster,
    anchor: DateAnchor,
    target: NaiveDate,
) -> Result<Assignment, RotaError> {
    rotate_left(roster.names(), days_since(anchor, target))
}
