use ahash::AHashMap;

/// Label used for precincts without a county field.
pub const UNKNOWN_COUNTY: &str = "unknown";

/// A county label and the precincts that carry it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct County {
    label: String,
    precincts: Vec<usize>,
}

impl County {
    #[inline] pub fn label(&self) -> &str { &self.label }

    /// Precinct indices, in input order.
    #[inline] pub fn precincts(&self) -> &[usize] { &self.precincts }

    #[inline] pub fn len(&self) -> usize { self.precincts.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.precincts.is_empty() }
}

/// Group precinct indices by county label. Groups are returned in order of first
/// appearance; the second vector maps each precinct to its group index.
pub(super) fn group_by_county<'a>(labels: impl IntoIterator<Item = &'a str>) -> (Vec<County>, Vec<usize>) {
    let mut counties: Vec<County> = Vec::new();
    let mut lookup: AHashMap<&'a str, usize> = AHashMap::new();

    let membership = labels.into_iter().enumerate()
        .map(|(i, label)| {
            let group = *lookup.entry(label).or_insert_with(|| {
                counties.push(County { label: label.to_string(), precincts: Vec::new() });
                counties.len() - 1
            });
            counties[group].precincts.push(i);
            group
        })
        .collect();

    (counties, membership)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_preserve_first_appearance_order() {
        let (counties, membership) = group_by_county(["b", "a", "b", "c", "a"]);

        let labels = counties.iter().map(County::label).collect::<Vec<_>>();
        assert_eq!(labels, vec!["b", "a", "c"]);
        assert_eq!(counties[0].precincts(), &[0, 2]);
        assert_eq!(counties[1].precincts(), &[1, 4]);
        assert_eq!(counties[2].precincts(), &[3]);
        assert_eq!(membership, vec![0, 1, 0, 2, 1]);
    }

    #[test]
    fn no_labels_gives_no_groups() {
        let (counties, membership) = group_by_county(std::iter::empty());
        assert!(counties.is_empty());
        assert!(membership.is_empty());
    }
}
