mod entry;

use leitner_stress::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
