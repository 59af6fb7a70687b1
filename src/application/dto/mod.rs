//! Data transfer objects for the HTTP API

mod room;

pub use room::{
    CreateRoomRequestDto, EmojiResponseDto, RenameRoomRequestDto, RoomSummaryDto,
    TextRequestDto,
};
