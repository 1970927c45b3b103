use crate::PointToken;

/// Tournament points awarded to (side A, side B) for one court.
///
/// Two or more games clear is worth 3, a one-game margin 2. Level games fall
/// back to the in-progress point, worth 1 to whoever is ahead. Anything
/// not yet entered scores nothing.
pub fn points_for(
    games_a: Option<u8>,
    games_b: Option<u8>,
    point_a: Option<PointToken>,
    point_b: Option<PointToken>,
) -> (u8, u8) {
    let (Some(games_a), Some(games_b)) = (games_a, games_b) else {
        return (0, 0);
    };

    match i16::from(games_a) - i16::from(games_b) {
        diff if diff > 1 => (3, 0),
        1 => (2, 0),
        -1 => (0, 2),
        diff if diff < -1 => (0, 3),
        _ => match (point_a, point_b) {
            (Some(a), Some(b)) => match a.rank().cmp(&b.rank()) {
                std::cmp::Ordering::Greater => (1, 0),
                std::cmp::Ordering::Less => (0, 1),
                std::cmp::Ordering::Equal => (0, 0),
            },
            _ => (0, 0),
        },
    }
}
