use grid_search::graph::{dijkstra_distances, WeightedGraph};

// Shortest distances from A on the graph
//
//   A --1-- B
//   |     / |
//   4   2   5
//   | /     |
//   C --1-- D

fn main() {
    let mut graph: WeightedGraph<char, u32> = WeightedGraph::default();
    for (a, b, weight) in [('A', 'B', 1), ('A', 'C', 4), ('B', 'C', 2), ('B', 'D', 5), ('C', 'D', 1)] {
        graph.entry(a).or_default().insert(b, weight);
        graph.entry(b).or_default().insert(a, weight);
    }
    for (node, distance) in dijkstra_distances(&graph, &'A') {
        println!("{node}: {distance}");
    }
}
