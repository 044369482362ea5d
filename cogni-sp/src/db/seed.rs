//! First-run demo materials
//!
//! An empty installation gets two sample materials so the API has
//! something to show. They run through the real processing pipeline, so
//! their content always matches the current subject config catalog. Any
//! existing material suppresses seeding entirely.

use crate::db::materials::{self, NewMaterial};
use cogni_common::process;
use cogni_common::schedule::format_review_date;
use cogni_common::{time, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::SqlitePool;
use tracing::info;

const DEMO_INPUTS: [&str; 2] = [
    "The quadratic formula is x = [-b ± √(b² - 4ac)] / 2a. It is used to find the roots of quadratic equations.",
    "World War II was a global war that lasted from 1939 to 1945. It involved the vast majority of the world's countries forming two opposing military alliances: the Allies and the Axis.",
];

/// Seed demo materials into an empty database; returns how many were added
pub async fn seed_demo_materials(pool: &SqlitePool) -> Result<usize> {
    if materials::count_materials(pool).await? > 0 {
        return Ok(0);
    }

    let mut rng = StdRng::from_entropy();
    for input in DEMO_INPUTS {
        let now = time::now();
        let processed = process::process_input(pool, input, now, &mut rng).await?;

        let review_dates: Vec<String> = processed
            .review_dates
            .iter()
            .map(|d| format_review_date(*d))
            .collect();

        materials::insert_material(
            pool,
            &NewMaterial {
                input_text: input,
                subject: processed.subject,
                summary: &processed.summary,
                flashcards: &processed.flashcards,
                review_dates: &review_dates,
                created_at: now,
                processed_at: now,
            },
        )
        .await?;
    }

    info!("Seeded {} demo study materials", DEMO_INPUTS.len());
    Ok(DEMO_INPUTS.len())
}
