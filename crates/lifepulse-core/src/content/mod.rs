//! Daily content selection.
//!
//! Maps a (feeling, phase) pair to a micro-action and a pep talk, and a phase
//! to a reflection question. Selection is a pure table lookup: the same input
//! always yields the same text.

mod table;

pub use table::{ComboKey, ComboTable, PhaseTable};

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::mood::EnergyPhase::{self, Build, Create, Deepen, Rest};
use crate::mood::Feeling::{self, Calm, Energetic, Inspired, Stressed, Tired};

/// Returned for a pair the micro-action table does not cover.
pub const DEFAULT_MICRO_ACTION: &str =
    "Take 5 minutes to breathe deeply and think about something that brings you joy.";

/// Returned for a pair the pep-talk table does not cover.
pub const DEFAULT_PEP_TALK: &str =
    "Remember that every day is a new opportunity. You are doing your best, and that is always enough.";

/// Returned for a phase the question table does not cover.
pub const DEFAULT_REFLECTION_QUESTION: &str =
    "What do you need most today to feel whole and balanced?";

const MICRO_ACTIONS: &[(Feeling, EnergyPhase, &str)] = &[
    (Energetic, Build, "Take 15 minutes to sketch a visual plan for a project you want to finish."),
    (Energetic, Create, "Spend 20 minutes on a creative project that brings you joy."),
    (
        Energetic,
        Deepen,
        "Read 10 pages of a book that grows your knowledge in an area you care about.",
    ),
    (Energetic, Rest, "Take a 15-minute walk outside and turn your energy into positive recovery."),
    (
        Tired,
        Build,
        "Write a short to-do list with at most 3 small tasks that feel manageable today.",
    ),
    (Tired, Create, "Make something small and simple today, like a short poem or a quick sketch."),
    (Tired, Deepen, "Listen to an inspiring podcast for 10 minutes."),
    (Tired, Rest, "Take a 20-minute power nap or a meditation break."),
    (
        Stressed,
        Build,
        "Break a stressful task into 3 small, manageable steps and focus only on the first.",
    ),
    (
        Stressed,
        Create,
        "Spend 10 minutes on a relaxing creative activity, like drawing or colouring.",
    ),
    (Stressed, Deepen, "Write down 3 things you are grateful for to regain perspective."),
    (Stressed, Rest, "Do 5 minutes of deep breathing or a short guided relaxation."),
    (Inspired, Build, "Sketch a plan for how you could bring an inspiring idea to life."),
    (
        Inspired,
        Create,
        "Capture your inspiration by writing or sketching for 15 minutes without censoring yourself.",
    ),
    (
        Inspired,
        Deepen,
        "Share your inspiration with someone who can help you develop the idea further.",
    ),
    (Inspired, Rest, "Visualise your inspiring idea for 10 minutes while you relax."),
    (Calm, Build, "Use your calm energy to plan or organise something you have been putting off."),
    (
        Calm,
        Create,
        "Create something that calms you even more, like a beautiful list or an inspiring board.",
    ),
    (Calm, Deepen, "Deepen your calm by reading something reflective for 15 minutes."),
    (Calm, Rest, "Enjoy a relaxing tea or another drink while simply being present in the moment."),
];

const PEP_TALKS: &[(Feeling, EnergyPhase, &str)] = &[
    (
        Energetic,
        Build,
        "Your energy is a wonderful gift today! When you build with this much force, you create possibilities for the future.",
    ),
    (
        Energetic,
        Create,
        "Creativity is shining around you today! Your energy and creative power can move mountains, so enjoy the flow.",
    ),
    (
        Energetic,
        Deepen,
        "Your curiosity and energy are the perfect combination for deeper understanding. Let yourself be absorbed by learning!",
    ),
    (
        Energetic,
        Rest,
        "Even an energetic body needs balance. Resting today recharges your batteries for tomorrow's adventures.",
    ),
    (
        Tired,
        Build,
        "Even when you feel tired, there is wisdom in taking small steps forward. Every bit of progress counts!",
    ),
    (
        Tired,
        Create,
        "Sometimes the most interesting ideas are born when we don't push ourselves. Let creating be easy and undemanding today.",
    ),
    (
        Tired,
        Deepen,
        "The tiredness you feel may be a signal to slow down and truly absorb knowledge on a deeper level.",
    ),
    (
        Tired,
        Rest,
        "Listening to your body's signals is a strength, not a weakness. Your rest today is an investment in tomorrow.",
    ),
    (
        Stressed,
        Build,
        "Behind the stress lies a chance to build something stable and lasting. One small step at a time.",
    ),
    (
        Stressed,
        Create,
        "Creativity can be a wonderful outlet for stress. Let the pen or the brush turn worry into something beautiful.",
    ),
    (
        Stressed,
        Deepen,
        "Immersing yourself in something meaningful can help you find calm in the middle of the storm.",
    ),
    (
        Stressed,
        Rest,
        "Your body is telling you something important. Resting is not just allowed, it is necessary to restore balance.",
    ),
    (
        Inspired,
        Build,
        "What a lovely feeling to be inspired and ready to build! Your ideas are valuable and deserve space.",
    ),
    (
        Inspired,
        Create,
        "When inspiration meets creativity, magic happens. Your creations can touch both you and others.",
    ),
    (
        Inspired,
        Deepen,
        "Your inspiration becomes even more powerful when you go deeper. The knowledge you seek has been waiting for you.",
    ),
    (
        Inspired,
        Rest,
        "Let the inspiration sink in while you rest. Like a seed sprouting in silence, it will grow stronger.",
    ),
    (
        Calm,
        Build,
        "Your calm gives you a steady foundation to build from. Like an anchor in the sea, you stand firm in your process.",
    ),
    (
        Calm,
        Create,
        "Your calm mind is the perfect place to create with intention and presence. Enjoy the process.",
    ),
    (
        Calm,
        Deepen,
        "Calm energy is perfect for depth and insight. You have the ability to see beyond the surface.",
    ),
    (
        Calm,
        Rest,
        "Being calm and resting is like sinking into a warm embrace. You deserve this moment of total acceptance.",
    ),
];

const REFLECTION_QUESTIONS: &[(EnergyPhase, &str)] = &[
    (Build, "What small step can you take today that makes you feel stronger and more grounded?"),
    (Create, "What are you longing to express or create today, without judging it?"),
    (Deepen, "Which area do you want to understand more deeply or explore a little further today?"),
    (Rest, "How can you give yourself permission to rest fully today?"),
];

fn builtin_combo_table(
    name: &'static str,
    entries: &[(Feeling, EnergyPhase, &'static str)],
    default: &'static str,
) -> ComboTable {
    ComboTable::complete(name, entries, default).unwrap_or_else(|err| {
        tracing::error!(table = name, error = %err, "built-in content table is incomplete");
        ComboTable::from_entries(entries, default)
    })
}

static MICRO_ACTION_TABLE: LazyLock<ComboTable> =
    LazyLock::new(|| builtin_combo_table("micro_actions", MICRO_ACTIONS, DEFAULT_MICRO_ACTION));

static PEP_TALK_TABLE: LazyLock<ComboTable> =
    LazyLock::new(|| builtin_combo_table("pep_talks", PEP_TALKS, DEFAULT_PEP_TALK));

static REFLECTION_QUESTION_TABLE: LazyLock<PhaseTable> = LazyLock::new(|| {
    PhaseTable::complete(
        "reflection_questions",
        REFLECTION_QUESTIONS,
        DEFAULT_REFLECTION_QUESTION,
    )
    .unwrap_or_else(|err| {
        tracing::error!(error = %err, "built-in question table is incomplete");
        PhaseTable::from_entries(REFLECTION_QUESTIONS, DEFAULT_REFLECTION_QUESTION)
    })
});

/// Suggested small task for the pair.
pub fn select_micro_action(feeling: Feeling, phase: EnergyPhase) -> &'static str {
    MICRO_ACTION_TABLE.get(feeling, phase)
}

/// Encouraging reflection for the pair.
pub fn select_pep_talk(feeling: Feeling, phase: EnergyPhase) -> &'static str {
    PEP_TALK_TABLE.get(feeling, phase)
}

/// Question to reflect on, chosen by phase only.
pub fn select_reflection_question(phase: EnergyPhase) -> &'static str {
    REFLECTION_QUESTION_TABLE.get(phase)
}

/// The three generated strings shown for one check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyContent {
    pub micro_action: String,
    pub pep_talk: String,
    pub reflection_question: String,
}

impl DailyContent {
    pub fn select(feeling: Feeling, phase: EnergyPhase) -> Self {
        Self {
            micro_action: select_micro_action(feeling, phase).to_string(),
            pep_talk: select_pep_talk(feeling, phase).to_string(),
            reflection_question: select_reflection_question(phase).to_string(),
        }
    }
}
