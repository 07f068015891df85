use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

/// Proporción del test reservada a palabras del cuaderno de difíciles.
const DIFFICULT_SHARE: f32 = 0.3;

/// Selecciona las palabras de una sesión: hasta un 30% del cuaderno de
/// difíciles y el resto del banco normal, ambas muestras sin repetición,
/// y el conjunto final barajado.
///
/// Si el banco apenas supera al cuaderno, `regular_count` se recorta a las
/// palabras normales disponibles: la sesión puede salir más corta, pero
/// nunca falla. Las palabras dominadas siguen siendo elegibles.
pub fn select_session_words<R: Rng>(
    words_per_test: usize,
    all_words: &[String],
    difficult_words: &[String],
    rng: &mut R,
) -> Vec<String> {
    let difficult_set: HashSet<&str> = difficult_words.iter().map(String::as_str).collect();
    let regular_pool: Vec<&String> = all_words
        .iter()
        .filter(|w| !difficult_set.contains(w.as_str()))
        .collect();

    let difficult_count =
        ((words_per_test as f32 * DIFFICULT_SHARE) as usize).min(difficult_words.len());
    let regular_count = (words_per_test - difficult_count).min(regular_pool.len());

    let mut selected: Vec<String> = difficult_words
        .choose_multiple(rng, difficult_count)
        .cloned()
        .collect();
    selected.extend(
        regular_pool
            .choose_multiple(rng, regular_count)
            .map(|w| (*w).clone()),
    );
    selected.shuffle(rng);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn master(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("palabra{i}")).collect()
    }

    #[test]
    fn twelve_words_empty_difficult_gives_ten_regular() {
        let all = master(12);
        let mut rng = StdRng::seed_from_u64(1);
        let selected = select_session_words(10, &all, &[], &mut rng);

        assert_eq!(selected.len(), 10);
        let unique: HashSet<_> = selected.iter().collect();
        assert_eq!(unique.len(), 10);
        assert!(selected.iter().all(|w| all.contains(w)));
    }

    #[test]
    fn difficult_share_is_at_most_thirty_percent() {
        let all = master(40);
        let difficult = words(&["palabra0", "palabra1", "palabra2", "palabra3", "palabra4"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selected = select_session_words(10, &all, &difficult, &mut rng);
            assert_eq!(selected.len(), 10);
            let picked_difficult = selected
                .iter()
                .filter(|w| difficult.contains(w))
                .count();
            assert!(picked_difficult <= 3, "seed {seed}: {picked_difficult} difíciles");
        }
    }

    #[test]
    fn fewer_difficult_than_quota_fills_with_regular() {
        let all = master(30);
        let difficult = words(&["palabra0"]);
        let mut rng = StdRng::seed_from_u64(7);
        let selected = select_session_words(10, &all, &difficult, &mut rng);
        assert_eq!(selected.len(), 10);
    }

    #[test]
    fn no_duplicates_across_sources() {
        let all = master(15);
        let difficult = words(&["palabra0", "palabra1", "palabra2", "fantasma"]);
        let mut rng = StdRng::seed_from_u64(3);
        let selected = select_session_words(10, &all, &difficult, &mut rng);
        let unique: HashSet<_> = selected.iter().collect();
        assert_eq!(unique.len(), selected.len());
    }

    #[test]
    fn undersized_regular_pool_clamps_instead_of_failing() {
        // 11 palabras en el banco, 10 de ellas difíciles: sólo queda una
        // normal, así que la sesión sale con 3 + 1.
        let all = master(11);
        let difficult: Vec<String> = all[..10].to_vec();
        let mut rng = StdRng::seed_from_u64(5);
        let selected = select_session_words(10, &all, &difficult, &mut rng);
        assert_eq!(selected.len(), 4);
        assert!(selected.contains(&"palabra10".to_string()));
    }
}
