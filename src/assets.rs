/// Embedded sprite art, validated into `Frame`s at startup.
///
/// A malformed sprite is a fatal startup error; `load` surfaces it once and
/// the game never starts partially.

use std::rc::Rc;

use crate::frames::{Frame, FrameError};

const ROCKET_POSE_1: &str = r"
  /\
 |  |
 |()|
/|__|\
  ''
";

const ROCKET_POSE_2: &str = r"
  /\
 |  |
 |()|
/|__|\
  \/
";

const GARBAGE_CAN: &str = r"
 ___
|. .|
|_._|
";

const GARBAGE_SATELLITE: &str = r"
 ==
<##>
 ==
";

const GARBAGE_ROCK: &str = r"
 /^\
< X >
 \v/
";

const GARBAGE_WRECK: &str = r"
  _____
 /     \
 \_____/
";

const GAME_OVER: &str = r"
  ____    _    __  __ _____    _____     _______ ____
 / ___|  / \  |  \/  | ____|  / _ \ \   / / ____|  _ \
| |  _  / _ \ | |\/| |  _|   | | | \ \ / /|  _| | |_) |
| |_| |/ ___ \| |  | | |___  | |_| |\ V / | |___|  _ <
 \____/_/   \_\_|  |_|_____|  \___/  \_/  |_____|_| \_\
";

const EXPLOSION_1: &str = "*";

const EXPLOSION_2: &str = r"
\*/
-*-
/*\
";

const EXPLOSION_3: &str = r"
\ | /
-- --
/ | \
";

const EXPLOSION_4: &str = r"
.   .
  .
.   .
";

pub struct Assets {
    /// Two ship poses, alternated while flying.
    pub ship: [Frame; 2],
    pub garbage: Vec<Rc<Frame>>,
    pub explosion: Rc<Vec<Frame>>,
    pub game_over: Rc<Frame>,
}

pub fn load() -> Result<Assets, FrameError> {
    let garbage = [GARBAGE_CAN, GARBAGE_SATELLITE, GARBAGE_ROCK, GARBAGE_WRECK]
        .iter()
        .map(|text| Frame::parse(text).map(Rc::new))
        .collect::<Result<Vec<_>, _>>()?;

    let explosion = [EXPLOSION_1, EXPLOSION_2, EXPLOSION_3, EXPLOSION_4]
        .iter()
        .map(|text| Frame::parse(text))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Assets {
        ship: [Frame::parse(ROCKET_POSE_1)?, Frame::parse(ROCKET_POSE_2)?],
        garbage,
        explosion: Rc::new(explosion),
        game_over: Rc::new(Frame::parse(GAME_OVER)?),
    })
}
