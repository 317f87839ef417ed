use multigraph_enumeration::codec::{decode, encode, reduced_len};
use multigraph_enumeration::{
    binomial, orbit, BinarySequences, LabeledGraph, Permutation, SignatureFilter,
};
use proptest::prelude::*;
use proptest::sample::subsequence;

fn reduced_vector() -> impl Strategy<Value = Vec<usize>> {
    (1usize..=5).prop_flat_map(|order| prop::collection::vec(0usize..4, reduced_len(order)))
}

fn permutation(order: usize) -> impl Strategy<Value = Permutation> {
    Just((0..order).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|p| Permutation::new(p).unwrap())
}

fn graph_with_two_permutations()
-> impl Strategy<Value = (LabeledGraph, Permutation, Permutation)> {
    reduced_vector().prop_flat_map(|reduced| {
        let graph = LabeledGraph::from_reduced(reduced).unwrap();
        let order = graph.order();
        (Just(graph), permutation(order), permutation(order))
    })
}

proptest! {
    #[test]
    fn lattice_yields_exactly_binomial_many(n in 0usize..12, k_seed in 0usize..12) {
        let k = k_seed.min(n);
        let seqs: Vec<_> = BinarySequences::new(n, k).unwrap().collect();
        prop_assert_eq!(seqs.len() as u64, binomial(n, k).unwrap());
        for pair in seqs.windows(2) {
            // strictly decreasing, true > false
            prop_assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn decode_inverts_encode(reduced in reduced_vector()) {
        prop_assert_eq!(decode(&encode(&reduced)), reduced);
    }

    #[test]
    fn relabeling_composes((graph, p, q) in graph_with_two_permutations()) {
        let stepwise = LabeledGraph::from_reduced(graph.apply_permutation(&p).unwrap())
            .unwrap()
            .apply_permutation(&q)
            .unwrap();
        let composed = p.then(&q).unwrap();
        prop_assert_eq!(stepwise, graph.apply_permutation(&composed).unwrap());
    }

    #[test]
    fn identity_is_neutral(reduced in reduced_vector()) {
        let graph = LabeledGraph::from_reduced(reduced).unwrap();
        let identity = Permutation::identity(graph.order());
        prop_assert_eq!(graph.apply_permutation(&identity).unwrap(), graph.reduced());
    }

    #[test]
    fn isomorphic_graphs_share_signatures((graph, p, _q) in graph_with_two_permutations()) {
        let image = LabeledGraph::from_reduced(graph.apply_permutation(&p).unwrap()).unwrap();
        prop_assert_eq!(image.size(), graph.size());
        prop_assert_eq!(image.degree_signature(), graph.degree_signature());
        prop_assert_eq!(
            image.signature(SignatureFilter::Degree),
            graph.signature(SignatureFilter::Degree)
        );
    }

    #[test]
    fn orbit_is_closed_and_symmetric((graph, p, _q) in graph_with_two_permutations()) {
        let image = LabeledGraph::from_reduced(graph.apply_permutation(&p).unwrap()).unwrap();
        let forward = orbit(&graph);
        prop_assert!(forward.contains(graph.reduced()));
        prop_assert!(forward.contains(image.reduced()));
        prop_assert!(orbit(&image).contains(graph.reduced()));
        prop_assert_eq!(orbit(&image).len(), forward.len());
    }

    #[test]
    fn packed_sequences_decode_to_full_length(
        bits in subsequence((0..8).collect::<Vec<_>>(), 0..=8)
    ) {
        // ones at the sampled positions of an 8-slot sequence
        let mut seq = vec![false; 8];
        for i in bits.iter().copied() {
            seq[i] = true;
        }
        let ones = bits.len();
        let decoded = decode(&seq);
        prop_assert_eq!(decoded.len(), ones + 1);
        prop_assert_eq!(decoded.iter().sum::<usize>(), 8 - ones);
    }
}
