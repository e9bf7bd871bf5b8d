#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    Growth,
    Attacks,
    EvsConditions,
    Miscellaneous,
}

/// Generation III: the index is simply the personality value modulo 24.
pub fn gen3_order_index(personality_value: u32) -> usize {
    (personality_value % 24) as usize
}

/// Generation IV: bits 13..=17 of the PID, modulo 24.
pub fn gen4_order_index(pid: u32) -> usize {
    (((pid & 0x3E000) >> 13) % 24) as usize
}

/// Byte offset of `component` inside the decrypted payload for the given order index.
pub fn offset_for(component: Component, order_index: usize, component_size: usize) -> usize {
    let position = match (component, order_index % 24) {
        (Component::Growth, 0..=5) => 0,
        (Component::Growth, 6 | 7 | 12 | 13 | 18 | 19) => 1,
        (Component::Growth, 8 | 10 | 14 | 16 | 20 | 22) => 2,
        (Component::Growth, _) => 3,
        (Component::Attacks, 6..=11) => 0,
        (Component::Attacks, 0 | 1 | 14 | 15 | 20 | 21) => 1,
        (Component::Attacks, 2 | 4 | 12 | 17 | 18 | 23) => 2,
        (Component::Attacks, _) => 3,
        (Component::EvsConditions, 12..=17) => 0,
        (Component::EvsConditions, 2 | 3 | 8 | 9 | 22 | 23) => 1,
        (Component::EvsConditions, 0 | 5 | 6 | 11 | 19 | 21) => 2,
        (Component::EvsConditions, _) => 3,
        (Component::Miscellaneous, 18..=23) => 0,
        (Component::Miscellaneous, 4 | 5 | 10 | 11 | 16 | 17) => 1,
        (Component::Miscellaneous, 1 | 3 | 7 | 9 | 13 | 15) => 2,
        (Component::Miscellaneous, _) => 3,
    };
    position * component_size
}

/// Borrow one substructure out of a decrypted payload.
pub fn substructure(
    payload: &[u8],
    component: Component,
    order_index: usize,
    component_size: usize,
) -> &[u8] {
    let start = offset_for(component, order_index, component_size);
    &payload[start..start + component_size]
}
