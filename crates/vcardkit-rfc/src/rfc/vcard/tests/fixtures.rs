//! vCard test fixtures.
//!
//! Examples taken from RFC 6350, RFC 2426, the versit vCard 2.1 document and
//! exports of common address books.

/// RFC 6350 §8 - Author's vCard example
pub const VCARD_AUTHOR: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Simon Perreault\r\n\
N:Perreault;Simon;;;ing. jr,M.Sc.\r\n\
BDAY:--0203\r\n\
ANNIVERSARY:20090808T1430-0500\r\n\
GENDER:M\r\n\
LANG;PREF=1:fr\r\n\
LANG;PREF=2:en\r\n\
ORG;TYPE=work:Viagenie\r\n\
ADR;TYPE=work:;Suite D2-630;2875 Laurier;\r\n \
Quebec;QC;G1V 2M2;Canada\r\n\
EMAIL;TYPE=work:simon.perreault@viagenie.ca\r\n\
GEO;TYPE=work:geo:46.772673,-71.282945\r\n\
URL;TYPE=home:http://nomis80.org\r\n\
END:VCARD\r\n";

/// Basic vCard 4.0
pub const VCARD_BASIC: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:John Doe\r\n\
N:Doe;John;;;\r\n\
EMAIL:john.doe@example.com\r\n\
TEL:+1-555-555-5555\r\n\
END:VCARD\r\n";

/// vCard with structured name
pub const VCARD_STRUCTURED_NAME: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Mr. John Q. Public Esq.\r\n\
N:Public;John;Quinlan;Mr.;Esq.\r\n\
END:VCARD\r\n";

/// vCard with organization
pub const VCARD_ORGANIZATION: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Jane Smith\r\n\
N:Smith;Jane;;;\r\n\
ORG:Acme Corporation;Engineering;Backend Team\r\n\
TITLE:Senior Software Engineer\r\n\
ROLE:Developer\r\n\
CATEGORIES:work,engineering\r\n\
NOTE:First line\\nSecond line\\, with comma\r\n\
END:VCARD\r\n";

/// RFC 2426 style card with a LABEL, an inline AGENT and an inline photo
pub const VCARD_V3: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
PRODID:-//Example Corp//Address Book//EN\r\n\
FN:Frank Dawson\r\n\
N:Dawson;Frank;;;\r\n\
ORG:Lotus Development Corporation\r\n\
item1.ADR;TYPE=WORK,POSTAL,PARCEL:;;6544 Battleford Drive;Raleigh;NC;27613-3502;U.S.A.\r\n\
item1.LABEL;TYPE=WORK:6544 Battleford Drive\\nRaleigh\\, NC 27613-3502\r\n\
TEL;TYPE=VOICE,MSG,WORK:+1-919-676-9515\r\n\
TEL;TYPE=FAX,WORK:+1-919-676-9564\r\n\
EMAIL;TYPE=INTERNET,PREF:Frank_Dawson@Lotus.com\r\n\
AGENT:BEGIN:VCARD\\nVERSION:3.0\\nFN:Susan Thomas\\nTEL:+1-919-555-\r\n \
1234\\nEND:VCARD\\n\r\n\
PHOTO;ENCODING=b;TYPE=JPEG:SGVsbG8=\r\n\
X-GENDER:Male\r\n\
X-ABUID:5AD380FD-B2DE-4261-BA99-DE1D1DB52FBE\r\n\
END:VCARD\r\n";

/// vCard 2.1 with quoted-printable values, bare parameters and a nested
/// AGENT card
pub const VCARD_V21: &str = "\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
N;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:M=C3=BCller;J=C3=BCrgen\r\n\
FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:J=C3=BCrgen M=C3=BCller\r\n\
TEL;HOME;VOICE:+49 30 1234567\r\n\
TEL;CELL:+49 170 1234567\r\n\
NOTE;ENCODING=QUOTED-PRINTABLE;CHARSET=UTF-8:Erste Zeile=0D=0A=\r\n\
Zweite Zeile\r\n\
AGENT:\r\n\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
FN:Assistant\r\n\
TEL;WORK:+49 30 7654321\r\n\
END:VCARD\r\n\
PHOTO;JPEG;ENCODING=BASE64:\r\n \
SGVsbG8=\r\n\
\r\n\
END:VCARD\r\n";

/// Several cards, one line that cannot be read and content around the cards
pub const VCARD_MALFORMED: &str = "\
garbage before the first card\r\n\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:First\r\n\
this line has no colon\r\n\
;PARAM=1:no name\r\n\
EMAIL:first@example.com\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Second\r\n\
END:VCARD\r\n";

/// Card that is never closed
pub const VCARD_UNTERMINATED: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Open Ended\r\n\
EMAIL:open@example.com\r\n";

/// A valid card followed by one with a version nobody wrote
pub const VCARD_UNSUPPORTED_VERSION: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Present\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
VERSION:5.0\r\n\
FN:From The Future\r\n\
EMAIL:future@example.com\r\n\
END:VCARD\r\n";
