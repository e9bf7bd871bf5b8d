use super::pokemon::{crypt, growth_species, is_valid_species, plausible_evs, Payload, ENCRYPTED_SIZE};
use crate::{checksum::record_checksum, shuffle::gen4_order_index};

/// Final evolutions common on competitive teams, ranked right after the legendaries.
const COMPETITIVE: &[u16] = &[
    3, 6, 9, 65, 68, 76, 94, 103, 112, 113, 115, 121, 123, 130, 131, 134, 135, 136, 142, 143,
    149, 154, 157, 160, 169, 181, 186, 195, 196, 197, 205, 208, 212, 214, 227, 229, 230, 232,
    242, 248, 254, 257, 260, 262, 272, 275, 282, 286, 289, 295, 306, 310, 319, 323, 330, 334,
    340, 344, 350, 357, 362, 365, 373, 376, 389, 392, 395, 398, 405, 407, 409, 411, 416, 419,
    423, 424, 428, 430, 437, 441, 442, 445, 448, 450, 452, 454, 460, 461, 462, 463, 464, 465,
    466, 467, 468, 469, 470, 471, 472, 473, 474, 475, 476, 477, 478, 479,
];

#[derive(Clone, Copy, Debug)]
pub struct Recovered {
    pub key: u16,
    pub species: u16,
    pub payload: Payload,
    /// The payload sums to the key that decrypted it, as an intact record would.
    pub self_consistent: bool,
}

/// 1 for legendaries and mythicals, 2 for common competitive picks, 3 for the rest.
pub fn species_priority(species: u16) -> u8 {
    match species {
        144..=146 | 150 | 151 | 243..=245 | 249..=251 | 377..=386 | 480..=493 => 1,
        _ if COMPETITIVE.contains(&species) => 2,
        _ => 3,
    }
}

/// Searches all seeds. A self-consistent candidate ends the search at once and is returned
/// even when a priority-1 species decrypted under an earlier seed; this departs from a plain
/// priority ranking on purpose, because an intact record always sums to its own key.
/// Without one, the first candidate with the best priority wins.
pub fn recover(encrypted: &[u8], pid: u32) -> Option<Recovered> {
    let order = gen4_order_index(pid);
    let mut payload = [0u8; ENCRYPTED_SIZE];
    let mut best: Option<(u8, Recovered)> = None;

    for key in 0..=u16::MAX {
        crypt(encrypted, key as u32, &mut payload);
        let species = growth_species(&payload, order);
        if !is_valid_species(species) || !plausible_evs(&payload, order) {
            continue;
        }

        let self_consistent = record_checksum(&payload) == key;
        let candidate = Recovered {
            key,
            species,
            payload,
            self_consistent,
        };
        if self_consistent {
            return Some(candidate);
        }

        let priority = species_priority(species);
        if best.as_ref().map_or(true, |(best_priority, _)| priority < *best_priority) {
            best = Some((priority, candidate));
        }
    }

    best.map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use byteorder::{ByteOrder, LittleEndian};

    use super::*;
    use crate::shuffle::{offset_for, Component};

    const PID: u32 = 0x0004_2000;

    fn payload_for(species: u16) -> Payload {
        let mut plain = [0u8; ENCRYPTED_SIZE];
        let growth = offset_for(Component::Growth, gen4_order_index(PID), 32);
        LittleEndian::write_u16(&mut plain[growth..], species);
        plain[growth + 0x10] = 4;
        plain.iter_mut().skip(0x40).take(16).for_each(|byte| *byte = 0x5A);
        plain
    }

    fn darkrai_payload() -> Payload {
        payload_for(491)
    }

    #[test]
    fn priorities() {
        assert_eq!(species_priority(150), 1);
        assert_eq!(species_priority(491), 1);
        assert_eq!(species_priority(94), 2);
        assert_eq!(species_priority(399), 3);
    }

    #[test]
    fn finds_the_key_of_an_intact_payload() {
        let plain = darkrai_payload();
        let checksum = record_checksum(&plain);
        let mut encrypted = [0u8; ENCRYPTED_SIZE];
        crypt(&plain, checksum as u32, &mut encrypted);

        let recovered = recover(&encrypted, PID).unwrap();
        assert_eq!(recovered.key, checksum);
        assert_eq!(recovered.species, 491);
        assert!(recovered.self_consistent);
        assert_eq!(recovered.payload, plain);
    }

    #[test]
    fn own_key_beats_a_higher_priority_species() {
        let plain = payload_for(400);
        let checksum = record_checksum(&plain);
        let mut encrypted = [0u8; ENCRYPTED_SIZE];
        crypt(&plain, checksum as u32, &mut encrypted);

        let recovered = recover(&encrypted, PID).unwrap();
        assert_eq!(species_priority(recovered.species), 3);
        assert_eq!(recovered.species, 400);
        assert_eq!(recovered.key, checksum);
    }

    #[test]
    fn damaged_payload_still_yields_a_species_in_range() {
        let plain = darkrai_payload();
        let checksum = record_checksum(&plain);
        let mut encrypted = [0u8; ENCRYPTED_SIZE];
        crypt(&plain, checksum as u32, &mut encrypted);
        encrypted[0x70] ^= 0xFF;

        let recovered = recover(&encrypted, PID).unwrap();
        assert!(is_valid_species(recovered.species));
    }
}
