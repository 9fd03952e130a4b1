// Generated from the freedesktop.org shared-mime-info database. Do not edit by hand.
//
// Keys are canonical MIME types (lowercase, no parameters), sorted.

pub(crate) static ENTRIES: &[(&str, &str)] = &[
    ("application/atom+xml", "Atom syndication feed"),
    ("application/dicom", "DICOM image"),
    ("application/epub+zip", "electronic book document"),
    ("application/geo+json", "GeoJSON geospatial data"),
    ("application/gzip", "Gzip archive"),
    ("application/illustrator", "Adobe Illustrator document"),
    ("application/java-archive", "Java archive"),
    ("application/javascript", "JavaScript program"),
    ("application/json", "JSON document"),
    ("application/ld+json", "JSON-LD document"),
    ("application/mbox", "mailbox file"),
    ("application/msword", "Word document"),
    ("application/octet-stream", "unknown"),
    ("application/ogg", "Ogg multimedia file"),
    ("application/pdf", "PDF document"),
    ("application/pgp-encrypted", "PGP/MIME-encrypted message header"),
    ("application/pgp-keys", "PGP keys"),
    ("application/pgp-signature", "detached OpenPGP signature"),
    ("application/pkcs10", "PKCS#10 certification request"),
    ("application/pkcs7-mime", "PKCS#7 Message or Certificate"),
    ("application/pkcs7-signature", "detached S/MIME signature"),
    ("application/pkcs8", "PKCS#8 private key"),
    ("application/pkix-cert", "X.509 certificate"),
    ("application/pkix-crl", "Certificate revocation list"),
    ("application/postscript", "PS document"),
    ("application/rss+xml", "RSS summary"),
    ("application/rtf", "RTF document"),
    ("application/sql", "SQL code"),
    ("application/toml", "TOML file"),
    ("application/vnd.android.package-archive", "Android package"),
    ("application/vnd.apple.mpegurl", "HTTP Live Streaming playlist"),
    ("application/vnd.debian.binary-package", "Debian package"),
    ("application/vnd.google-earth.kml+xml", "KML geographic data"),
    ("application/vnd.google-earth.kmz", "KML geographic compressed data"),
    ("application/vnd.ms-access", "JET database"),
    ("application/vnd.ms-cab-compressed", "Windows CAB file"),
    ("application/vnd.ms-excel", "Excel spreadsheet"),
    ("application/vnd.ms-fontobject", "Embedded OpenType font"),
    ("application/vnd.ms-htmlhelp", "CHM document"),
    ("application/vnd.ms-powerpoint", "PowerPoint presentation"),
    ("application/vnd.ms-publisher", "Microsoft Publisher document"),
    ("application/vnd.ms-visio.drawing.main+xml", "Microsoft Visio Drawing"),
    ("application/vnd.ms-works", "Microsoft Works document"),
    ("application/vnd.oasis.opendocument.chart", "ODC chart"),
    ("application/vnd.oasis.opendocument.database", "ODB database"),
    ("application/vnd.oasis.opendocument.formula", "ODF formula"),
    ("application/vnd.oasis.opendocument.graphics", "ODG drawing"),
    ("application/vnd.oasis.opendocument.presentation", "ODP presentation"),
    ("application/vnd.oasis.opendocument.spreadsheet", "ODS spreadsheet"),
    ("application/vnd.oasis.opendocument.text", "ODT document"),
    ("application/vnd.openxmlformats-officedocument.presentationml.presentation", "PowerPoint 2007 presentation"),
    ("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", "Excel 2007 spreadsheet"),
    ("application/vnd.openxmlformats-officedocument.wordprocessingml.document", "Word 2007 document"),
    ("application/vnd.rar", "RAR archive"),
    ("application/vnd.sqlite3", "SQLite3 database"),
    ("application/vnd.visio", "Microsoft Visio Diagram"),
    ("application/wasm", "WebAssembly binary"),
    ("application/x-7z-compressed", "7-zip archive"),
    ("application/x-apple-diskimage", "Apple disk image"),
    ("application/x-bittorrent", "BitTorrent seed file"),
    ("application/x-bzip2", "Bzip2 archive"),
    ("application/x-cd-image", "raw CD image"),
    ("application/x-compressed-tar", "Tar archive (gzip-compressed)"),
    ("application/x-core", "program crash data"),
    ("application/x-cpio", "CPIO archive"),
    ("application/x-desktop", "desktop configuration file"),
    ("application/x-executable", "executable"),
    ("application/x-font-ttf", "TrueType font"),
    ("application/x-iso9660-appimage", "AppImage application bundle"),
    ("application/x-java", "Java class"),
    ("application/x-java-jnlp-file", "JNLP file"),
    ("application/x-lzip", "Lzip archive"),
    ("application/x-lzma", "LZMA archive"),
    ("application/x-msdownload", "Windows executable"),
    ("application/x-msi", "Windows Installer package"),
    ("application/x-object", "object code"),
    ("application/x-perl", "Perl script"),
    ("application/x-php", "PHP script"),
    ("application/x-raw-disk-image", "raw disk image"),
    ("application/x-redhat-package-manager", "RPM package"),
    ("application/x-sharedlib", "shared library"),
    ("application/x-shellscript", "shell script"),
    ("application/x-shockwave-flash", "Shockwave Flash file"),
    ("application/x-tar", "Tar archive"),
    ("application/x-trash", "backup file"),
    ("application/x-troff-man", "Troff document (with manpage macros)"),
    ("application/x-wais-source", "WAIS source code"),
    ("application/x-x509-ca-cert", "DER/PEM/Netscape-encoded X.509 certificate"),
    ("application/x-xz", "XZ archive"),
    ("application/x-xz-compressed-tar", "Tar archive (XZ-compressed)"),
    ("application/x-yaml", "YAML document"),
    ("application/x-zerosize", "empty document"),
    ("application/xhtml+xml", "XHTML page"),
    ("application/xml", "XML document"),
    ("application/xml-dtd", "DTD file"),
    ("application/zip", "Zip archive"),
    ("application/zstd", "Zstandard archive"),
    ("audio/aac", "AAC audio"),
    ("audio/ac3", "Dolby Digital audio"),
    ("audio/amr", "AMR audio"),
    ("audio/flac", "FLAC audio"),
    ("audio/midi", "MIDI audio"),
    ("audio/mp4", "MPEG-4 audio"),
    ("audio/mpeg", "MP3 audio"),
    ("audio/ogg", "Ogg Audio"),
    ("audio/opus", "Opus audio"),
    ("audio/vnd.wave", "WAV audio"),
    ("audio/webm", "WebM audio"),
    ("audio/x-aiff", "AIFF/Amiga/Mac audio"),
    ("audio/x-matroska", "Matroska audio"),
    ("audio/x-mpegurl", "MP3 audio (streamed)"),
    ("audio/x-ms-wma", "Windows Media audio"),
    ("audio/x-speex", "Speex audio"),
    ("audio/x-vorbis+ogg", "Ogg Vorbis audio"),
    ("audio/x-wav", "WAV audio"),
    ("font/collection", "font collection"),
    ("font/otf", "OpenType font"),
    ("font/ttf", "TrueType font"),
    ("font/woff", "WOFF font"),
    ("font/woff2", "WOFF2 font"),
    ("image/avif", "AVIF image"),
    ("image/bmp", "Windows BMP image"),
    ("image/gif", "GIF image"),
    ("image/heif", "HEIF image"),
    ("image/jp2", "JPEG-2000 JP2 image"),
    ("image/jpeg", "JPEG image"),
    ("image/jxl", "JPEG XL image"),
    ("image/png", "PNG image"),
    ("image/svg+xml", "SVG image"),
    ("image/svg+xml-compressed", "compressed SVG image"),
    ("image/tiff", "TIFF image"),
    ("image/vnd.adobe.photoshop", "Photoshop image"),
    ("image/vnd.djvu", "DjVu image"),
    ("image/vnd.dxf", "DXF vector image"),
    ("image/vnd.microsoft.icon", "Windows icon"),
    ("image/webp", "WebP image"),
    ("image/x-canon-cr2", "Canon CR2 raw image"),
    ("image/x-nikon-nef", "Nikon raw image"),
    ("image/x-portable-anymap", "PNM image"),
    ("image/x-portable-bitmap", "PBM image"),
    ("image/x-portable-graymap", "PGM image"),
    ("image/x-portable-pixmap", "PPM image"),
    ("image/x-tga", "TGA image"),
    ("image/x-xcf", "GIMP image"),
    ("message/rfc822", "email message"),
    ("model/gltf+json", "glTF model"),
    ("model/gltf-binary", "glTF binary model"),
    ("model/obj", "OBJ 3D model"),
    ("model/stl", "STL 3D model"),
    ("model/vrml", "VRML document"),
    ("multipart/encrypted", "encrypted message"),
    ("multipart/mixed", "compound documents"),
    ("multipart/related", "compound document"),
    ("multipart/x-mixed-replace", "stream of data (server push)"),
    ("text/calendar", "VCS/ICS calendar"),
    ("text/css", "CSS stylesheet"),
    ("text/csv", "CSV document"),
    ("text/html", "HTML document"),
    ("text/javascript", "JavaScript program"),
    ("text/markdown", "Markdown document"),
    ("text/plain", "plain text document"),
    ("text/rust", "Rust source code"),
    ("text/tab-separated-values", "TSV document"),
    ("text/troff", "Troff document"),
    ("text/vcard", "electronic business card"),
    ("text/vnd.graphviz", "Graphviz DOT graph"),
    ("text/vtt", "WebVTT subtitles"),
    ("text/x-c++src", "C++ source code"),
    ("text/x-chdr", "C header"),
    ("text/x-csharp", "C# source code"),
    ("text/x-csrc", "C source code"),
    ("text/x-go", "Go source code"),
    ("text/x-java", "Java source code"),
    ("text/x-log", "application log"),
    ("text/x-makefile", "Makefile"),
    ("text/x-python", "Python script"),
    ("text/x-python3", "Python 3 script"),
    ("text/x-readme", "README document"),
    ("text/x-ruby", "Ruby script"),
    ("text/x-scss", "SCSS document"),
    ("text/x-tex", "TeX document"),
    ("text/x-typescript", "TypeScript source code"),
    ("video/3gpp", "3GPP multimedia file"),
    ("video/dv", "DV video"),
    ("video/mp2t", "MPEG-2 transport stream"),
    ("video/mp4", "MPEG-4 video"),
    ("video/mpeg", "MPEG video"),
    ("video/ogg", "Ogg Video"),
    ("video/quicktime", "QuickTime video"),
    ("video/webm", "WebM video"),
    ("video/x-flv", "Flash video"),
    ("video/x-matroska", "Matroska video"),
    ("video/x-ms-wmv", "Windows Media video"),
    ("video/x-msvideo", "AVI video"),
];
