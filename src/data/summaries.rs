//! Weekly development summaries

use super::week::WeekIndex;

static SUMMARIES: [&str; 42] = [
    "Conception occurs. The fertilized egg begins its journey.",
    "The blastocyst implants into the uterine wall.",
    "Baby's heart and nervous system begin to form.",
    "The neural tube forms, which will become baby's brain and spinal cord.",
    "Baby's heart begins to beat! Major organs start developing.",
    "Facial features begin to form. Arm and leg buds appear.",
    "Baby's brain is growing rapidly. Eyelids and nose are forming.",
    "Webbed fingers and toes are developing. Baby starts to move!",
    "Baby's heartbeat can be heard on ultrasound. Organs continue developing.",
    "Baby's vital organs are formed and starting to function.",
    "Baby's bones are beginning to harden. Fingernails are forming.",
    "Baby's reflexes are developing. They can open and close their fists.",
    "Baby's vocal cords are forming. Fingerprints are developing.",
    "Baby can make facial expressions and may even squint and frown.",
    "Baby's skeleton continues to develop. They're very active now!",
    "Baby's eyes can move. You might start feeling those first kicks!",
    "Baby can hear sounds from the outside world now.",
    "Baby's ears are properly positioned. They can yawn and hiccup!",
    "Vernix caseosa (protective coating) covers baby's skin.",
    "Halfway there! Baby can hear your voice and may respond to sounds.",
    "Baby's movements become more coordinated and noticeable.",
    "Baby's eyebrows and eyelashes are visible. Senses are developing.",
    "Baby's lungs are preparing for breathing, though not yet functional.",
    "Viability milestone! Baby has a chance of survival if born now.",
    "Baby responds to your voice and touch. Hair may be growing.",
    "Baby's eyes are beginning to open. They can see light.",
    "Third trimester begins! Baby's brain is developing rapidly.",
    "Baby can dream! REM sleep has begun.",
    "Baby's muscles and lungs are maturing rapidly.",
    "Baby's brain is developing billions of neurons.",
    "Baby's five senses are fully developed and functional.",
    "Baby practices breathing by inhaling amniotic fluid.",
    "Baby's bones are hardening, but the skull remains soft.",
    "Baby's central nervous system is maturing.",
    "Baby's kidneys are fully developed. Liver is processing waste.",
    "Baby is shedding vernix and lanugo. Almost ready!",
    "Full term! Baby could arrive any day now.",
    "Baby has a firm grasp and is perfecting reflexes.",
    "Baby's brain and lungs continue maturing.",
    "Due date! Baby is fully developed and ready to meet you.",
    "Still waiting! Baby continues to gain weight.",
    "Past due. Doctor may recommend induction.",
];

/// One-sentence development summary for a week (clamped to 1-42)
pub fn lookup_summary(week: i64) -> &'static str {
    SUMMARIES[WeekIndex::clamp(week).offset()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lookup() {
        assert!(lookup_summary(20).starts_with("Halfway there!"));
        assert!(lookup_summary(40).starts_with("Due date!"));
    }

    #[test]
    fn test_summary_clamps() {
        assert_eq!(lookup_summary(0), lookup_summary(1));
        assert_eq!(lookup_summary(-10), lookup_summary(1));
        assert_eq!(lookup_summary(45), lookup_summary(42));
    }
}
