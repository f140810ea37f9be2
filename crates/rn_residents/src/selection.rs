use rand::Rng;
use rn_prefab::{Prefab, PrefabCatalog};

/// Pick a resident-producing prefab uniformly at random.
///
/// Returns `None` when the catalog holds no resident prefabs.
pub fn choose_resident_prefab<'a>(
    catalog: &'a PrefabCatalog,
    rng: &mut impl Rng,
) -> Option<&'a Prefab> {
    let residents = catalog.list_residents();
    if residents.is_empty() {
        return None;
    }
    Some(residents[rng.gen_range(0..residents.len())])
}
