//! Text artifact for a partition

use crate::partition::Partition;
use std::io::{self, Write};

/// Write the two-part artifact
///
/// First the minimum element of every class, then every class in full.
/// Classes are ordered by their minimum, members ascending. Elements are
/// printed as algebraic expressions.
pub fn write_partition<W: Write>(out: &mut W, partition: &Partition) -> io::Result<()> {
    let classes = partition.canonical_classes();

    write!(out, "{{")?;
    for (i, members) in classes.iter().enumerate() {
        if i != 0 {
            writeln!(out, ",")?;
        }
        write!(out, "{}", members[0])?;
    }
    writeln!(out, "}}\n")?;

    write!(out, "{{")?;
    for (i, members) in classes.iter().enumerate() {
        if i != 0 {
            writeln!(out, ",")?;
        }
        write!(out, "{{")?;
        for (j, e) in members.iter().enumerate() {
            if j != 0 {
                write!(out, ", ")?;
            }
            write!(out, "{}", e)?;
        }
        write!(out, "}}")?;
    }
    writeln!(out, "}}")
}

/// Render the artifact into a string
pub fn render_partition(partition: &Partition) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_partition(&mut buf, partition);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Element;

    fn el(i: usize) -> Element {
        Element::new(i).unwrap()
    }

    #[test]
    fn test_discrete_render() {
        let p = Partition::discrete(3);
        assert_eq!(render_partition(&p), "{0,\n1,\n2}\n\n{{0},\n{1},\n{2}}\n");
    }

    #[test]
    fn test_render_orders_by_minimum() {
        // 4 = a, 5 = 1+a
        let mut p = Partition::discrete(6);
        p.merge(el(5), el(0)).unwrap();
        p.merge(el(5), el(3)).unwrap();
        p.merge(el(1), el(4)).unwrap();
        p.merge(el(1), el(2)).unwrap();
        assert_eq!(
            render_partition(&p),
            "{0,\n1}\n\n{{0, 3, 1+a},\n{1, 2, a}}\n"
        );
    }

    #[test]
    fn test_single_class() {
        let p = Partition::from_assignment(Element::range(2), |_| el(1)).unwrap();
        assert_eq!(render_partition(&p), "{0}\n\n{{0, 1}}\n");
    }
}
