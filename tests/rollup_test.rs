//! Tests for the cost rollup pass

use rstest::rstest;

use travelcost::domain::{rollup_costs, CompanyRecord, CompanyTree, Travel, TreeBuilder};

fn company(id: &str, parent_id: &str, name: &str) -> CompanyRecord {
    CompanyRecord {
        id: id.to_string(),
        parent_id: parent_id.to_string(),
        name: name.to_string(),
        created_at: "2021-02-26T00:00:00.000Z".to_string(),
    }
}

fn travel(id: &str, company_id: &str, price: f64) -> Travel {
    Travel {
        id: id.to_string(),
        price,
        departure: "Lima".to_string(),
        destination: "Paris".to_string(),
        company_id: company_id.to_string(),
        created_at: "2021-02-26T00:00:00.000Z".to_string(),
    }
}

fn build(companies: Vec<CompanyRecord>, travels: Vec<Travel>) -> CompanyTree {
    TreeBuilder::new().build(companies, travels).unwrap().tree
}

fn cost_of(tree: &CompanyTree, id: &str) -> f64 {
    tree.iter()
        .find(|(_, n)| n.data.id == id)
        .and_then(|(_, n)| n.data.cost)
        .expect("cost computed")
}

#[test]
fn given_leaf_without_travels_when_rolling_up_then_cost_is_zero() {
    // Arrange
    let mut tree = build(
        vec![company("1", "0", "Root"), company("2", "1", "Leaf")],
        vec![],
    );

    // Act
    let total = rollup_costs(&mut tree);

    // Assert
    assert_eq!(total, 0.0);
    assert_eq!(cost_of(&tree, "2"), 0.0);
}

#[test]
fn given_three_level_tree_when_rolling_up_then_costs_sum_bottom_up() {
    // Arrange: root(10) -> {A(5) -> GA(3), B(0) -> GB(7)}
    let mut tree = build(
        vec![
            company("1", "0", "Root"),
            company("2", "1", "A"),
            company("3", "1", "B"),
            company("4", "2", "GA"),
            company("5", "3", "GB"),
        ],
        vec![
            travel("t1", "1", 10.0),
            travel("t2", "2", 5.0),
            travel("t3", "4", 3.0),
            travel("t4", "5", 7.0),
        ],
    );

    // Act
    let total = rollup_costs(&mut tree);

    // Assert
    assert_eq!(cost_of(&tree, "4"), 3.0);
    assert_eq!(cost_of(&tree, "2"), 8.0);
    assert_eq!(cost_of(&tree, "5"), 7.0);
    assert_eq!(cost_of(&tree, "3"), 7.0);
    assert_eq!(cost_of(&tree, "1"), 25.0);
    assert_eq!(total, 25.0);
}

#[test]
fn given_root_with_only_descendants_when_rolling_up_then_root_carries_subtree_total() {
    // Arrange: root owns no travels itself
    let mut tree = build(
        vec![
            company("1", "0", "Holding"),
            company("2", "1", "A"),
            company("3", "1", "B"),
        ],
        vec![travel("t1", "2", 12.5), travel("t2", "3", 2.5)],
    );

    // Act
    let total = rollup_costs(&mut tree);

    // Assert
    assert_eq!(total, 15.0);
    assert_eq!(cost_of(&tree, "1"), 15.0);
}

#[test]
fn given_rolled_up_tree_when_checking_every_node_then_cost_is_additive() {
    // Arrange
    let mut tree = build(
        vec![
            company("1", "0", "Root"),
            company("2", "1", "A"),
            company("3", "2", "B"),
            company("4", "2", "C"),
        ],
        vec![
            travel("t1", "1", 1.0),
            travel("t2", "2", 2.0),
            travel("t3", "3", 4.0),
            travel("t4", "4", 8.0),
            travel("t5", "4", 16.0),
        ],
    );

    // Act
    rollup_costs(&mut tree);

    // Assert: cost(N) == own travel prices + children costs, for all N
    for (_, node) in tree.iter() {
        let child_sum: f64 = node
            .children
            .iter()
            .filter_map(|&c| tree.node(c))
            .filter_map(|c| c.data.cost)
            .sum();
        assert_eq!(node.data.cost.unwrap(), node.data.travel_total() + child_sum);
    }
}

#[rstest]
#[case(vec![], 0.0)]
#[case(vec![("t1", 9.0)], 9.0)]
#[case(vec![("t1", 0.5), ("t2", 0.25), ("t3", 0.25)], 1.0)]
fn given_multiple_travels_when_rolling_up_then_node_sums_all_prices(
    #[case] prices: Vec<(&str, f64)>,
    #[case] expected: f64,
) {
    // Arrange
    let travels = prices
        .into_iter()
        .map(|(id, price)| travel(id, "1", price))
        .collect();
    let mut tree = build(vec![company("1", "0", "Root")], travels);

    // Act
    let total = rollup_costs(&mut tree);

    // Assert
    assert_eq!(total, expected);
}

#[test]
fn given_identical_input_when_rolling_up_twice_then_costs_match() {
    // Arrange
    let records = || {
        (
            vec![
                company("1", "0", "Root"),
                company("2", "1", "A"),
                company("3", "1", "B"),
            ],
            vec![travel("t1", "2", 3.5), travel("t2", "3", 1.5)],
        )
    };

    // Act
    let (c1, t1) = records();
    let (c2, t2) = records();
    let mut first = build(c1, t1);
    let mut second = build(c2, t2);
    rollup_costs(&mut first);
    rollup_costs(&mut second);

    // Assert
    let costs = |tree: &CompanyTree| -> Vec<(String, f64)> {
        tree.iter()
            .map(|(_, n)| (n.data.id.clone(), n.data.cost.unwrap()))
            .collect()
    };
    assert_eq!(costs(&first), costs(&second));
}
