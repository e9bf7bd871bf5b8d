use std::io;

use super::save::Layout;
use crate::{
    bytes::ByteWindow,
    text::{decode_gen4, title_case},
    trainer::{PlayerGender, TimePlayed, TrainerProfile},
    TrainerId,
};

const NAME_LENGTH: usize = 16;

/// Reads the trainer card out of the general block. Names are stored in capitals and come
/// back title cased; play time is not zero padded.
pub fn read_trainer(general: ByteWindow<'_>, layout: &Layout) -> io::Result<TrainerProfile> {
    let trainer = general.window(layout.trainer_offset, 0x26)?;
    let time = TimePlayed {
        hours: trainer.u16(0x22)?,
        minutes: trainer.u8(0x24)?,
        seconds: trainer.u8(0x25)?,
    };
    let profile = TrainerProfile {
        name: title_case(&decode_gen4(trainer.bytes(0x00, NAME_LENGTH)?)),
        id: TrainerId::from_u32(trainer.u32(0x10)?).display_id(),
        money: trainer.u32(0x14)?.to_string(),
        time: time.unpadded(),
        badges: Some(trainer.u8(0x1A)?.count_ones() as u8),
        gender: PlayerGender::from_byte(trainer.u8(0x18)?),
    };
    log::debug!("Trainer {} ({}), {:?} badges", profile.name, profile.id, profile.badges);
    Ok(profile)
}
