use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;
use std::f64::consts::PI;

use itertools::Itertools;
use ordered_float::NotNan;

use crate::SMALL;
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{DistanceTo, Shape, Transformable};
use crate::geometry::primitives::{Circle, Point, Rect};

/// Comparator overriding the default largest-radius-first ordering used when
/// orienting a cluster
pub type OrientationOrder<'a> = &'a dyn Fn(&Circle, &Circle) -> Ordering;

/// Index-based union-find with path compression
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
        }
        self.parent[i]
    }

    fn union(&mut self, x: usize, y: usize) {
        let x_root = self.find(x);
        let y_root = self.find(y);
        self.parent[x_root] = y_root;
    }
}

/// Groups circles into connectivity clusters: two circles belong together when their
/// separation is less than the sum of their radii. Returns clusters of indices into
/// the input slice, in order of first appearance.
pub fn disjoint_clusters(circles: &[Circle]) -> Vec<Vec<usize>> {
    let mut union_find = UnionFind::new(circles.len());
    for ((i, c1), (j, c2)) in circles.iter().enumerate().tuple_combinations() {
        let max_distance = c1.radius + c2.radius;
        if c1.center.distance(&c2.center) + SMALL < max_distance {
            union_find.union(j, i);
        }
    }

    let mut clusters: Vec<Vec<usize>> = vec![];
    let mut cluster_of_root: HashMap<usize, usize> = HashMap::new();
    for i in 0..circles.len() {
        let root = union_find.find(i);
        match cluster_of_root.get(&root) {
            Some(&c) => clusters[c].push(i),
            None => {
                cluster_of_root.insert(root, clusters.len());
                clusters.push(vec![i]);
            }
        }
    }
    clusters
}

/// Brings a cluster into canonical position: its largest circle at the origin, the
/// second largest at an angle of `orientation` from it, and the third largest on the
/// canonical side of the line through the first two (mirroring the whole cluster if
/// it is not).
fn orientate_circles(
    cluster: &mut [(usize, Circle)],
    orientation: f64,
    order: Option<OrientationOrder>,
) {
    match order {
        Some(order) => cluster.sort_by(|(_, a), (_, b)| order(a, b)),
        None => cluster.sort_by_key(|&(_, c)| Reverse(NotNan::new(c.radius).expect("radius is NaN"))),
    }

    // shift the cluster so the largest circle sits at the origin
    if let Some(&(_, first)) = cluster.first() {
        let shift = Transformation::from_translation((-first.center.0, -first.center.1));
        for (_, c) in cluster.iter_mut() {
            c.transform(&shift);
        }
    }

    // rotate so the second largest circle lies at an angle of `orientation` from the largest
    if cluster.len() > 1 {
        let second = cluster[1].1.center;
        let rotation = f64::atan2(second.0, second.1) - orientation;
        let rotate = Transformation::from_rotation(rotation);
        for (_, c) in cluster.iter_mut() {
            c.transform(&rotate);
        }
    }

    // mirror the cluster if the third largest circle fell past the plane through the
    // first two
    if cluster.len() > 2 {
        let third = cluster[2].1.center;
        let mut angle = f64::atan2(third.0, third.1) - orientation;
        while angle < 0.0 {
            angle += 2.0 * PI;
        }
        while angle > 2.0 * PI {
            angle -= 2.0 * PI;
        }
        if angle > PI {
            let second = cluster[1].1.center;
            let slope = second.1 / (1e-10 + second.0);
            let mirror = Transformation::from_reflection(slope);
            for (_, c) in cluster.iter_mut() {
                c.transform(&mirror);
            }
        }
    }
}

struct Cluster {
    members: Vec<(usize, Circle)>,
    bounds: Rect,
}

/// Appends `cluster` to `combined`, offset to sit to the right of and/or below the
/// current combined bounds (centered along the non-offset axis), with `spacing` in
/// between.
fn add_cluster(
    cluster: &Cluster,
    right: bool,
    bottom: bool,
    return_bounds: &Rect,
    spacing: f64,
    combined: &mut Vec<(usize, Circle)>,
) {
    let bounds = &cluster.bounds;

    let x_offset = match right {
        true => return_bounds.x_max - bounds.x_min + spacing,
        false => {
            let mut offset = return_bounds.x_max - bounds.x_max;
            let centreing = bounds.width() / 2.0 - return_bounds.width() / 2.0;
            if centreing < 0.0 {
                offset += centreing;
            }
            offset
        }
    };
    let y_offset = match bottom {
        true => return_bounds.y_max - bounds.y_min + spacing,
        false => {
            let mut offset = return_bounds.y_max - bounds.y_max;
            let centreing = bounds.height() / 2.0 - return_bounds.height() / 2.0;
            if centreing < 0.0 {
                offset += centreing;
            }
            offset
        }
    };

    for &(i, c) in &cluster.members {
        combined.push((
            i,
            Circle::new(
                Point(c.center.0 + x_offset, c.center.1 + y_offset),
                c.radius,
            ),
        ));
    }
}

/// Normalizes a solved layout for presentation: every disjoint cluster is oriented
/// canonically, then the clusters are tiled into a single composite layout, largest
/// first, in groups of three around the growing combined bounding box.
pub fn normalize_solution(
    circles: &[Circle],
    orientation: f64,
    order: Option<OrientationOrder>,
) -> Vec<Circle> {
    debug_assert!(!circles.is_empty(), "no circles to normalize");

    let mut clusters = disjoint_clusters(circles)
        .into_iter()
        .map(|members| {
            let mut members = members.into_iter().map(|i| (i, circles[i])).collect_vec();
            orientate_circles(&mut members, orientation, order);
            let bounds = Rect::bounding_circles(members.iter().map(|(_, c)| c));
            Cluster { members, bounds }
        })
        .collect_vec();

    clusters.sort_by_key(|c| Reverse(NotNan::new(c.bounds.area()).expect("bounds area is NaN")));

    let mut clusters = clusters.into_iter();
    let primary = clusters.next().expect("no clusters");
    let mut combined = primary.members;
    let mut return_bounds = primary.bounds;
    let spacing = return_bounds.width() / 50.0;
    let secondary = clusters.collect_vec();

    // lay out the remaining clusters three at a time in a grid around the combined
    // bounding box: to the right, below, and diagonally below-right
    const PLACEMENTS: [(bool, bool); 3] = [(true, false), (false, true), (true, true)];
    for trio in secondary.chunks(3) {
        for (cluster, &(right, bottom)) in trio.iter().zip(PLACEMENTS.iter()) {
            add_cluster(cluster, right, bottom, &return_bounds, spacing, &mut combined);
        }
        return_bounds = Rect::bounding_circles(combined.iter().map(|(_, c)| c));
    }

    // back to per-set indexing
    let mut out = circles.to_vec();
    for (i, c) in combined {
        out[i] = c;
    }
    out
}
