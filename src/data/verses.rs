//! Devotional verses, one per week (KJV)

use serde::{Deserialize, Serialize};

use super::week::WeekIndex;

/// Verse text and its citation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseEntry {
    pub text: String,
    #[serde(default)]
    pub reference: String,
}

impl VerseEntry {
    pub fn new(text: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reference: reference.into(),
        }
    }
}

// (reference, text)
static VERSES: [(&str, &str); 42] = [
    ("Jeremiah 1:5", "Before I formed thee in the belly I knew thee; and before thou camest forth out of the womb I sanctified thee."),
    ("Psalm 139:13", "For thou hast possessed my reins: thou hast covered me in my mother's womb."),
    ("Psalm 139:14", "I will praise thee; for I am fearfully and wonderfully made: marvellous are thy works; and that my soul knoweth right well."),
    ("Psalm 127:3", "Lo, children are an heritage of the LORD: and the fruit of the womb is his reward."),
    ("Isaiah 44:24", "Thus saith the LORD, thy redeemer, and he that formed thee from the womb, I am the LORD that maketh all things."),
    ("Job 10:11", "Thou hast clothed me with skin and flesh, and hast fenced me with bones and sinews."),
    ("Psalm 139:15", "My substance was not hid from thee, when I was made in secret, and curiously wrought in the lowest parts of the earth."),
    ("Psalm 139:16", "Thine eyes did see my substance, yet being unperfect; and in thy book all my members were written."),
    ("Philippians 4:6", "Be careful for nothing; but in every thing by prayer and supplication with thanksgiving let your requests be made known unto God."),
    ("Proverbs 3:5", "Trust in the LORD with all thine heart; and lean not unto thine own understanding."),
    ("Isaiah 40:31", "But they that wait upon the LORD shall renew their strength; they shall mount up with wings as eagles; they shall run, and not be weary; and they shall walk, and not faint."),
    ("Joshua 1:9", "Be strong and of a good courage; be not afraid, neither be thou dismayed: for the LORD thy God is with thee whithersoever thou goest."),
    ("1 Peter 5:7", "Casting all your care upon him; for he careth for you."),
    ("Numbers 6:24-25", "The LORD bless thee, and keep thee: The LORD make his face shine upon thee, and be gracious unto thee."),
    ("Psalm 46:1", "God is our refuge and strength, a very present help in trouble."),
    ("Luke 1:44", "For, lo, as soon as the voice of thy salutation sounded in mine ears, the babe leaped in my womb for joy."),
    ("Zephaniah 3:17", "The LORD thy God in the midst of thee is mighty; he will save, he will rejoice over thee with joy; he will rest in his love, he will joy over thee with singing."),
    ("Psalm 121:8", "The LORD shall preserve thy going out and thy coming in from this time forth, and even for evermore."),
    ("Isaiah 41:10", "Fear thou not; for I am with thee: be not dismayed; for I am thy God: I will strengthen thee; yea, I will help thee; yea, I will uphold thee with the right hand of my righteousness."),
    ("Jeremiah 29:11", "For I know the thoughts that I think toward you, saith the LORD, thoughts of peace, and not of evil, to give you an expected end."),
    ("Ecclesiastes 11:5", "As thou knowest not what is the way of the spirit, nor how the bones do grow in the womb of her that is with child: even so thou knowest not the works of God who maketh all."),
    ("Psalm 22:10", "I was cast upon thee from the womb: thou art my God from my mother's belly."),
    ("Romans 8:28", "And we know that all things work together for good to them that love God, to them who are the called according to his purpose."),
    ("Lamentations 3:22-23", "It is of the LORD's mercies that we are not consumed, because his compassions fail not. They are new every morning: great is thy faithfulness."),
    ("Psalm 71:6", "By thee have I been holden up from the womb: thou art he that took me out of my mother's bowels: my praise shall be continually of thee."),
    ("Matthew 11:28", "Come unto me, all ye that labour and are heavy laden, and I will give you rest."),
    ("Isaiah 66:13", "As one whom his mother comforteth, so will I comfort you."),
    ("Psalm 23:1", "The LORD is my shepherd; I shall not want."),
    ("2 Corinthians 12:9", "My grace is sufficient for thee: for my strength is made perfect in weakness."),
    ("Philippians 4:13", "I can do all things through Christ which strengtheneth me."),
    ("Proverbs 31:25", "Strength and honour are her clothing; and she shall rejoice in time to come."),
    ("Isaiah 40:11", "He shall feed his flock like a shepherd: he shall gather the lambs with his arm, and carry them in his bosom, and shall gently lead those that are with young."),
    ("John 14:27", "Peace I leave with you, my peace I give unto you: not as the world giveth, give I unto you. Let not your heart be troubled, neither let it be afraid."),
    ("Psalm 34:4", "I sought the LORD, and he heard me, and delivered me from all my fears."),
    ("Deuteronomy 31:8", "And the LORD, he it is that doth go before thee; he will be with thee, he will not fail thee, neither forsake thee: fear not, neither be dismayed."),
    ("Song of Solomon 2:12", "The flowers appear on the earth; the time of the singing of birds is come, and the voice of the turtle is heard in our land."),
    ("Ecclesiastes 3:1-2", "To every thing there is a season, and a time to every purpose under the heaven: A time to be born, and a time to die."),
    ("John 16:21", "A woman when she is in travail hath sorrow, because her hour is come: but as soon as she is delivered of the child, she remembereth no more the anguish, for joy that a man is born into the world."),
    ("Isaiah 43:2", "When thou passest through the waters, I will be with thee; and through the rivers, they shall not overflow thee."),
    ("1 Samuel 1:27", "For this child I prayed; and the LORD hath given me my petition which I asked of him."),
    ("Psalm 27:14", "Wait on the LORD: be of good courage, and he shall strengthen thine heart: wait, I say, on the LORD."),
    ("Habakkuk 2:3", "For the vision is yet for an appointed time, but at the end it shall speak, and not lie: though it tarry, wait for it; because it will surely come, it will not tarry."),
];

/// Default verse for a week (clamped to 1-42)
pub fn lookup_verse(week: i64) -> VerseEntry {
    let (reference, text) = VERSES[WeekIndex::clamp(week).offset()];
    VerseEntry::new(text, reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_verse_has_reference_and_text() {
        for week in WeekIndex::all() {
            let verse = lookup_verse(week.get() as i64);
            assert!(!verse.text.is_empty(), "week {} has no text", week);
            assert!(verse.reference.contains(':'), "week {} reference", week);
        }
    }

    #[test]
    fn test_verse_clamps() {
        assert_eq!(lookup_verse(-1), lookup_verse(1));
        assert_eq!(lookup_verse(100), lookup_verse(42));
    }

    #[test]
    fn test_known_verse() {
        assert_eq!(lookup_verse(13).reference, "1 Peter 5:7");
        assert_eq!(lookup_verse(14).reference, "Numbers 6:24-25");
    }
}
