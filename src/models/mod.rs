pub mod loaders;
pub mod plan;
pub mod question;
pub mod round;
pub mod title;

pub use loaders::{load_rounds, read_questions};
pub use plan::{Block, DocumentPlan, QuestionBlock, RoundBlock, RoundRow, TitleLine, TitleStyle};
pub use question::QuestionRecord;
pub use round::{RoundFile, RoundItem, SixtySecondRound};
pub use title::TitleParams;
