/// Color class of one byte position in a differing block.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Tag {
    Match,
    Mismatch,
}

pub fn tag_bytes(left: &[u8], right: &[u8]) -> Vec<Tag> {
    debug_assert_eq!(left.len(), right.len());
    left.iter()
        .zip(right.iter())
        .map(|(l, r)| if l == r { Tag::Match } else { Tag::Mismatch })
        .collect()
}

// minimize_colors() should satisfy following requirements:
//   - Replaying the result over the hex pass and then again over the
//     printable pass, starting in the color of `prefix`, yields `tags[i]` at
//     every position of both passes.
//   - Emit as few directives as possible under that replay.
//
// `prefix` is the tag whose color is active right before position 0 of the
// hex pass (the color the address is printed in). Position 0 may only be
// omitted when it already has that color and the last position of the hex
// pass leaves it active again for the printable pass.
pub fn minimize_colors(tags: &[Tag], prefix: Tag) -> Vec<Option<Tag>> {
    let mut emit = vec![None; tags.len()];
    let (first, last) = match (tags.first(), tags.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return emit,
    };

    if !(first == prefix && last == prefix) {
        emit[0] = Some(first);
    }

    let mut current = first;
    for (i, &tag) in tags.iter().enumerate().skip(1) {
        if tag != current {
            emit[i] = Some(tag);
            current = tag;
        }
    }
    log::trace!("minimize_colors(): {:?} -> {:?}", tags, emit);
    emit
}
