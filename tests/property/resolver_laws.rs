use brickctl::model::{Cluster, ClusterSource, ClusterState};
use brickctl::resolve::{find_all, resolve, Resolution};
use proptest::prelude::*;

fn cluster_strategy() -> impl Strategy<Value = Cluster> {
    ("[a-z0-9]{1,6}", "[A-Za-z -]{0,10}").prop_map(|(id, name)| Cluster {
        id,
        name,
        state: ClusterState::Terminated,
        source: ClusterSource::Ui,
    })
}

proptest! {
    /// The outcome is decided purely by how many entities contain the needle.
    #[test]
    fn outcome_follows_match_count(
        clusters in prop::collection::vec(cluster_strategy(), 0..8),
        needle in "[a-zA-Z0-9]{0,3}",
    ) {
        let matching = find_all(&clusters, &needle);
        match resolve(&clusters, &needle) {
            Resolution::NotFound => prop_assert!(matching.is_empty()),
            Resolution::Found(found) => {
                prop_assert_eq!(matching.len(), 1);
                prop_assert_eq!(found, matching[0]);
            }
            Resolution::Ambiguous(n) => {
                prop_assert!(n >= 2);
                prop_assert_eq!(n, matching.len());
            }
        }
    }

    /// Case of the needle never changes the outcome.
    #[test]
    fn resolution_ignores_needle_case(
        clusters in prop::collection::vec(cluster_strategy(), 0..8),
        needle in "[a-z0-9]{1,3}",
    ) {
        let lower = resolve(&clusters, &needle);
        let upper = resolve(&clusters, &needle.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    /// A full id resolves to its entity when no other entity contains it.
    #[test]
    fn full_unique_id_resolves(clusters in prop::collection::vec(cluster_strategy(), 1..6)) {
        let target = &clusters[0];
        let others_match = clusters[1..].iter().any(|c| {
            c.id.to_lowercase().contains(&target.id.to_lowercase())
                || c.name.to_lowercase().contains(&target.id.to_lowercase())
        });
        prop_assume!(!others_match);
        prop_assert_eq!(resolve(&clusters, &target.id), Resolution::Found(target));
    }
}
