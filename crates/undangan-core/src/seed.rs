// SPDX-FileCopyrightText: 2026 Undangan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default template set for seeding an empty collection.
//!
//! The bracketed `[...]` placeholders (date, venue, maps link) are meant to
//! be filled in by the user when editing the template.

use crate::types::{Template, TemplateKind};

/// Build the five starter templates with fresh ids and timestamps.
pub fn default_templates() -> Vec<Template> {
    vec![
        Template::new(
            "Template Formal 1",
            TemplateKind::Formal,
            "Assalamu'alaikum Wr. Wb.\n\nYang terhormat {nama_tamu},\n\nDengan memohon rahmat dan ridho Allah SWT, kami bermaksud mengundang Bapak/Ibu/Saudara/i untuk menghadiri acara pernikahan putra-putri kami:\n\nBayu & Shahya\n\nYang akan diselenggarakan pada:\n\nHari, Tanggal: [Isi tanggal acara]\nWaktu: [Isi waktu acara]\nTempat: [Isi lokasi acara]\nLokasi: [Link Google Maps]\n\nMerupakan suatu kehormatan bagi kami apabila Bapak/Ibu/Saudara/i berkenan hadir untuk memberikan doa restu kepada kedua mempelai.\n\nAtas kehadiran dan doa restunya, kami ucapkan terima kasih.\n\nWassalamu'alaikum Wr. Wb.\n\nKeluarga Besar\nBayu & Shahya",
        ),
        Template::new(
            "Template Formal 2",
            TemplateKind::Formal,
            "Bismillahirrahmanirrahim\n\nKepada Yth.\n{nama_tamu}\n\nDengan segala kerendahan hati, kami mengundang Bapak/Ibu/Saudara/i untuk hadir dalam acara sakral pernikahan:\n\nBayu & Shahya\n\n[Hari & Tanggal]\n[Waktu]\n[Tempat]\n[Alamat Lengkap]\n[Link Lokasi]\n\nTanpa mengurangi rasa hormat, kami memohon kehadiran Bapak/Ibu/Saudara/i untuk menjadi saksi dan memberikan doa restu atas pernikahan kami.\n\nJazakumullahu khairan katsiran.\n\nHormat kami,\nKedua Mempelai & Keluarga",
        ),
        Template::new(
            "Template Informal 1",
            TemplateKind::Informal,
            "Halo {nama_tamu}!\n\nKabar bahagia nih! Kami dengan senang hati mengundang kamu untuk hadir di pernikahan:\n\nBayu & Shahya\n\nSave the date ya:\nTanggal: [Tanggal]\nWaktu: [Waktu]\nTempat: [Tempat]\nLokasi: [Link Lokasi]\n\nKehadiran kamu akan sangat berarti buat kami. Gak sabar ketemu dan berbagi kebahagiaan bareng!\n\nTerima kasih sebelumnya ya!\n\nWith love,\nBayu & Shahya",
        ),
        Template::new(
            "Template Informal 2",
            TemplateKind::Informal,
            "Hi {nama_tamu}!\n\nBig news! Kami mengundang kamu untuk celebrate our special day:\n\nBayu & Shahya Wedding\n\nDetails:\n[Hari, Tanggal]\n[Waktu]\n[Venue]\n[Alamat]\n[Maps Link]\n\nCan't wait to share this magical moment with you! Your presence would mean the world to us\n\nRSVP and see you there! \n\nLove & hugs,\nB & S",
        ),
        Template::new(
            "Template Singkat",
            TemplateKind::Informal,
            "{nama_tamu}, kamu diundang!\n\nBayu & Shahya Wedding\n[Tanggal] [Waktu]\n[Tempat]\n[Link]\n\nDatang ya!\n\n#BayuShahyaWedding",
        ),
    ]
}
