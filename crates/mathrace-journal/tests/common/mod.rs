//! Journals of one sample race, as written by each revision of the simulator.

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset};
use mathrace_journal::JournalVersion;

pub const JOURNAL_R5539: &str = r"--- 001 inizializzazione simulatore
--- 003 10 7 70 10 6 4 1 1 10 8 -- squadre: 10 quesiti: 7
--- 004 1 20 quesito 1 punteggio iniziale 20
--- 004 2 20 quesito 2 punteggio iniziale 20
--- 004 3 20 quesito 3 punteggio iniziale 20
--- 004 4 20 quesito 4 punteggio iniziale 20
--- 004 5 20 quesito 5 punteggio iniziale 20
--- 004 6 20 quesito 6 punteggio iniziale 20
--- 004 7 20 quesito 7 punteggio iniziale 20
0 002 inizio gara
60 022 aggiorna punteggio esercizi, orologio: 1
120 022 aggiorna punteggio esercizi, orologio: 2
180 022 aggiorna punteggio esercizi, orologio: 3
240 022 aggiorna punteggio esercizi, orologio: 4
243 010 1 2 squadra 1 sceglie 2 come jolly
251 010 2 3 squadra 2 sceglie 3 come jolly
259 010 3 4 squadra 3 sceglie 4 come jolly
300 022 aggiorna punteggio esercizi, orologio: 5
302 021 timeout jolly
330 011 5 5 1 squadra 5, quesito 5: giusto
341 011 6 6 0 squadra 6, quesito 6: sbagliato
360 022 aggiorna punteggio esercizi, orologio: 6
420 022 aggiorna punteggio esercizi, orologio: 7
435 011 2 3 1 squadra 2, quesito 3: giusto
450 011 3 4 0 squadra 3, quesito 4: sbagliato
480 022 aggiorna punteggio esercizi, orologio: 8
510 011 8 2 0 squadra 8, quesito 2: sbagliato
540 022 aggiorna punteggio esercizi, orologio: 9
570 011 9 3 1 squadra 9, quesito 3: giusto
600 022 aggiorna punteggio esercizi, orologio: 10
600 029 termine gara
--- 999 fine simulatore
";

pub const JOURNAL_R11167: &str = r"--- 001 inizializzazione simulatore
--- 003 10 7 70 10 6 4 1 1 10 8 -- squadre: 10 quesiti: 7
--- 004 1 20 quesito 1 punteggio iniziale 20
--- 004 2 20 quesito 2 punteggio iniziale 20
--- 004 3 20 quesito 3 punteggio iniziale 20
--- 004 4 20 quesito 4 punteggio iniziale 20
--- 004 5 20 quesito 5 punteggio iniziale 20
--- 004 6 20 quesito 6 punteggio iniziale 20
--- 004 7 20 quesito 7 punteggio iniziale 20
0 200 inizio gara
60 101 aggiorna punteggio esercizi, orologio: 1
120 101 aggiorna punteggio esercizi, orologio: 2
180 101 aggiorna punteggio esercizi, orologio: 3
240 101 aggiorna punteggio esercizi, orologio: 4
243 120 1 2 squadra 1 sceglie 2 come jolly
251 120 2 3 squadra 2 sceglie 3 come jolly
259 120 3 4 squadra 3 sceglie 4 come jolly
300 101 aggiorna punteggio esercizi, orologio: 5
302 121 timeout jolly
330 110 5 5 1 squadra 5, quesito 5: giusto
341 110 6 6 0 squadra 6, quesito 6: sbagliato
360 101 aggiorna punteggio esercizi, orologio: 6
420 101 aggiorna punteggio esercizi, orologio: 7
435 110 2 3 1 squadra 2, quesito 3: giusto
450 110 3 4 0 squadra 3, quesito 4: sbagliato
480 101 aggiorna punteggio esercizi, orologio: 8
510 110 8 2 0 squadra 8, quesito 2: sbagliato
540 101 aggiorna punteggio esercizi, orologio: 9
570 110 9 3 1 squadra 9, quesito 3: giusto
600 101 aggiorna punteggio esercizi, orologio: 10
600 210 termine gara
--- 999 fine simulatore
";

pub const JOURNAL_R11184: &str = r"--- 001 inizializzazione simulatore
--- 003 10 7 70 10 6 4 1 1 10 8 -- squadre: 10 quesiti: 7
--- 004 1 20 quesito 1 punteggio iniziale 20
--- 004 2 20 quesito 2 punteggio iniziale 20
--- 004 3 20 quesito 3 punteggio iniziale 20
--- 004 4 20 quesito 4 punteggio iniziale 20
--- 004 5 20 quesito 5 punteggio iniziale 20
--- 004 6 20 quesito 6 punteggio iniziale 20
--- 004 7 20 quesito 7 punteggio iniziale 20
0 200 inizio gara
60 101 aggiorna punteggio esercizi, orologio: 1
120 101 aggiorna punteggio esercizi, orologio: 2
180 101 aggiorna punteggio esercizi, orologio: 3
240 101 aggiorna punteggio esercizi, orologio: 4
243 120 1 2 PROT:1 squadra 1 sceglie 2 come jolly
251 120 2 3 PROT:2 squadra 2 sceglie 3 come jolly
259 120 3 4 PROT:3 squadra 3 sceglie 4 come jolly
300 101 aggiorna punteggio esercizi, orologio: 5
302 121 timeout jolly
330 110 5 5 1 PROT:4 squadra 5, quesito 5: giusto
341 110 6 6 0 PROT:5 squadra 6, quesito 6: sbagliato
360 101 aggiorna punteggio esercizi, orologio: 6
420 101 aggiorna punteggio esercizi, orologio: 7
435 110 2 3 1 PROT:6 squadra 2, quesito 3: giusto
450 110 3 4 0 PROT:7 squadra 3, quesito 4: sbagliato
480 101 aggiorna punteggio esercizi, orologio: 8
510 110 8 2 0 PROT:8 squadra 8, quesito 2: sbagliato
540 101 aggiorna punteggio esercizi, orologio: 9
570 110 9 3 1 PROT:9 squadra 9, quesito 3: giusto
600 101 aggiorna punteggio esercizi, orologio: 10
600 210 termine gara
--- 999 fine simulatore
";

pub const JOURNAL_R11189: &str = r"--- 001 inizializzazione simulatore
--- 003 10 7 70 10 6 4 1 1 10 8 -- squadre: 10 quesiti: 7
--- 004 1 20 quesito 1 punteggio iniziale 20
--- 004 2 20 quesito 2 punteggio iniziale 20
--- 004 3 20 quesito 3 punteggio iniziale 20
--- 004 4 20 quesito 4 punteggio iniziale 20
--- 004 5 20 quesito 5 punteggio iniziale 20
--- 004 6 20 quesito 6 punteggio iniziale 20
--- 004 7 20 quesito 7 punteggio iniziale 20
0 200 inizio gara
60 101 aggiorna punteggio esercizi, orologio: 1
120 101 aggiorna punteggio esercizi, orologio: 2
180 101 aggiorna punteggio esercizi, orologio: 3
240 101 aggiorna punteggio esercizi, orologio: 4
243 120 1 2 PROT:1 squadra 1 sceglie 2 come jolly
251 120 2 3 PROT:2 squadra 2 sceglie 3 come jolly
259 120 3 4 PROT:3 squadra 3 sceglie 4 come jolly
300 101 aggiorna punteggio esercizi, orologio: 5
302 121 timeout jolly
330 110 5 5 1 PROT:4 squadra 5, quesito 5: giusto
341 110 6 6 0 PROT:5 squadra 6, quesito 6: sbagliato
360 101 aggiorna punteggio esercizi, orologio: 6
420 101 aggiorna punteggio esercizi, orologio: 7
435 110 2 3 1 PROT:6 squadra 2, quesito 3: giusto
450 110 3 4 0 PROT:7 squadra 3, quesito 4: sbagliato
480 101 aggiorna punteggio esercizi, orologio: 8
510 110 8 2 0 PROT:8 squadra 8, quesito 2: sbagliato
540 101 aggiorna punteggio esercizi, orologio: 9
570 110 9 3 1 PROT:9 squadra 9, quesito 3: giusto
600 101 aggiorna punteggio esercizi, orologio: 10
# the following event 901 differentiates this file from the r11184 one
600 901 avanzamento estrapolato orologio: 10
600 210 termine gara
--- 999 fine simulatore
";

pub const JOURNAL_R17497: &str = r"--- 001 inizializzazione simulatore
--- 003 10 7 70 10 6 4.1 1 1 10 8 -- squadre: 10 quesiti: 7
--- 004 1 20 quesito 1 punteggio iniziale 20
--- 004 2 20 quesito 2 punteggio iniziale 20
--- 004 3 20 quesito 3 punteggio iniziale 20
--- 004 4 20 quesito 4 punteggio iniziale 20
--- 004 5 20 quesito 5 punteggio iniziale 20
--- 004 6 20 quesito 6 punteggio iniziale 20
--- 004 7 20 quesito 7 punteggio iniziale 20
0 200 inizio gara
60 101 aggiorna punteggio esercizi, orologio: 1
120 101 aggiorna punteggio esercizi, orologio: 2
180 101 aggiorna punteggio esercizi, orologio: 3
240 101 aggiorna punteggio esercizi, orologio: 4
243 120 1 2 PROT:1 squadra 1 sceglie 2 come jolly
251 120 2 3 PROT:2 squadra 2 sceglie 3 come jolly
259 120 3 4 PROT:3 squadra 3 sceglie 4 come jolly
300 101 aggiorna punteggio esercizi, orologio: 5
302 121 timeout jolly
330 110 5 5 1 PROT:4 squadra 5, quesito 5: giusto
341 110 6 6 0 PROT:5 squadra 6, quesito 6: sbagliato
360 101 aggiorna punteggio esercizi, orologio: 6
420 101 aggiorna punteggio esercizi, orologio: 7
435 110 2 3 1 PROT:6 squadra 2, quesito 3: giusto
450 110 3 4 0 PROT:7 squadra 3, quesito 4: sbagliato
480 101 aggiorna punteggio esercizi, orologio: 8
510 110 8 2 0 PROT:8 squadra 8, quesito 2: sbagliato
540 101 aggiorna punteggio esercizi, orologio: 9
570 110 9 3 1 PROT:9 squadra 9, quesito 3: giusto
600 101 aggiorna punteggio esercizi, orologio: 10
600 210 termine gara
--- 999 fine simulatore
";

pub const JOURNAL_R17505: &str = r"--- 001 inizializzazione simulatore
--- 003 10 7 70 10 6 4.1 1 1 10 8 -- squadre: 10 quesiti: 7
--- 004 1 20 quesito 1 punteggio iniziale 20
--- 004 2 20 quesito 2 punteggio iniziale 20
--- 004 3 20 quesito 3 punteggio iniziale 20
--- 004 4 20 quesito 4 punteggio iniziale 20
--- 004 5 20 quesito 5 punteggio iniziale 20
--- 004 6 20 quesito 6 punteggio iniziale 20
--- 004 7 20 quesito 7 punteggio iniziale 20
--- 005 1 0 Squadra 1
--- 005 2 0 Squadra 2
--- 005 3 0 Squadra 3
--- 005 4 0 Squadra 4
--- 005 5 0 Squadra 5
--- 005 6 0 Squadra 6
--- 005 7 0 Squadra 7
--- 005 8 0 Squadra 8
--- 005 9 0 Squadra 9
--- 005 10 0 Squadra 10
0 200 inizio gara
60 101 aggiorna punteggio esercizi, orologio: 1
120 101 aggiorna punteggio esercizi, orologio: 2
180 101 aggiorna punteggio esercizi, orologio: 3
240 101 aggiorna punteggio esercizi, orologio: 4
243 120 1 2 PROT:1 squadra 1 sceglie 2 come jolly
251 120 2 3 PROT:2 squadra 2 sceglie 3 come jolly
259 120 3 4 PROT:3 squadra 3 sceglie 4 come jolly
300 101 aggiorna punteggio esercizi, orologio: 5
302 121 timeout jolly
330 110 5 5 1 PROT:4 squadra 5, quesito 5: giusto
341 110 6 6 0 PROT:5 squadra 6, quesito 6: sbagliato
360 101 aggiorna punteggio esercizi, orologio: 6
420 101 aggiorna punteggio esercizi, orologio: 7
435 110 2 3 1 PROT:6 squadra 2, quesito 3: giusto
450 110 3 4 0 PROT:7 squadra 3, quesito 4: sbagliato
480 101 aggiorna punteggio esercizi, orologio: 8
510 110 8 2 0 PROT:8 squadra 8, quesito 2: sbagliato
540 101 aggiorna punteggio esercizi, orologio: 9
570 110 9 3 1 PROT:9 squadra 9, quesito 3: giusto
600 101 aggiorna punteggio esercizi, orologio: 10
600 210 termine gara
--- 999 fine simulatore
";

pub const JOURNAL_R17548: &str = r"--- 001 inizializzazione simulatore
--- 002 10+0:70 7:20 4.1;1 10-2 -- squadre: 10 quesiti: 7
--- 004 1 20 quesito 1 punteggio iniziale 20
--- 004 2 20 quesito 2 punteggio iniziale 20
--- 004 3 20 quesito 3 punteggio iniziale 20
--- 004 4 20 quesito 4 punteggio iniziale 20
--- 004 5 20 quesito 5 punteggio iniziale 20
--- 004 6 20 quesito 6 punteggio iniziale 20
--- 004 7 20 quesito 7 punteggio iniziale 20
--- 005 1 0 Squadra 1
--- 005 2 0 Squadra 2
--- 005 3 0 Squadra 3
--- 005 4 0 Squadra 4
--- 005 5 0 Squadra 5
--- 005 6 0 Squadra 6
--- 005 7 0 Squadra 7
--- 005 8 0 Squadra 8
--- 005 9 0 Squadra 9
--- 005 10 0 Squadra 10
0 200 inizio gara
60 101 aggiorna punteggio esercizi, orologio: 1
120 101 aggiorna punteggio esercizi, orologio: 2
180 101 aggiorna punteggio esercizi, orologio: 3
240 101 aggiorna punteggio esercizi, orologio: 4
243 120 1 2 PROT:1 squadra 1 sceglie 2 come jolly
251 120 2 3 PROT:2 squadra 2 sceglie 3 come jolly
259 120 3 4 PROT:3 squadra 3 sceglie 4 come jolly
300 101 aggiorna punteggio esercizi, orologio: 5
302 121 timeout jolly
330 110 5 5 1 PROT:4 squadra 5, quesito 5: giusto
341 110 6 6 0 PROT:5 squadra 6, quesito 6: sbagliato
360 101 aggiorna punteggio esercizi, orologio: 6
420 101 aggiorna punteggio esercizi, orologio: 7
435 110 2 3 1 PROT:6 squadra 2, quesito 3: giusto
450 110 3 4 0 PROT:7 squadra 3, quesito 4: sbagliato
480 101 aggiorna punteggio esercizi, orologio: 8
510 110 8 2 0 PROT:8 squadra 8, quesito 2: sbagliato
540 101 aggiorna punteggio esercizi, orologio: 9
570 110 9 3 1 PROT:9 squadra 9, quesito 3: giusto
600 101 aggiorna punteggio esercizi, orologio: 10
600 210 termine gara
--- 999 fine simulatore
";

pub const JOURNAL_R20642: &str = r"--- 001 inizializzazione simulatore
--- 002 10+0:70 7:20 4.1;1 10-2 -- squadre: 10 quesiti: 7
--- 011 10 20 15 10 8 6 5 4 3 2 1 definizione dei 10 livelli di bonus
--- 012 6 100 60 40 30 20 10 definizione dei 6 livelli di superbonus
--- 004 1 20 quesito 1 punteggio iniziale 20
--- 004 2 20 quesito 2 punteggio iniziale 20
--- 004 3 20 quesito 3 punteggio iniziale 20
--- 004 4 20 quesito 4 punteggio iniziale 20
--- 004 5 20 quesito 5 punteggio iniziale 20
--- 004 6 20 quesito 6 punteggio iniziale 20
--- 004 7 20 quesito 7 punteggio iniziale 20
--- 005 1 0 Squadra 1
--- 005 2 0 Squadra 2
--- 005 3 0 Squadra 3
--- 005 4 0 Squadra 4
--- 005 5 0 Squadra 5
--- 005 6 0 Squadra 6
--- 005 7 0 Squadra 7
--- 005 8 0 Squadra 8
--- 005 9 0 Squadra 9
--- 005 10 0 Squadra 10
0 200 inizio gara
60 101 aggiorna punteggio esercizi, orologio: 1
120 101 aggiorna punteggio esercizi, orologio: 2
180 101 aggiorna punteggio esercizi, orologio: 3
240 101 aggiorna punteggio esercizi, orologio: 4
243 120 1 2 PROT:1 squadra 1 sceglie 2 come jolly
251 120 2 3 PROT:2 squadra 2 sceglie 3 come jolly
259 120 3 4 PROT:3 squadra 3 sceglie 4 come jolly
300 101 aggiorna punteggio esercizi, orologio: 5
302 121 timeout jolly
330 110 5 5 1 PROT:4 squadra 5, quesito 5: giusto
341 110 6 6 0 PROT:5 squadra 6, quesito 6: sbagliato
360 101 aggiorna punteggio esercizi, orologio: 6
420 101 aggiorna punteggio esercizi, orologio: 7
435 110 2 3 1 PROT:6 squadra 2, quesito 3: giusto
450 110 3 4 0 PROT:7 squadra 3, quesito 4: sbagliato
480 101 aggiorna punteggio esercizi, orologio: 8
510 110 8 2 0 PROT:8 squadra 8, quesito 2: sbagliato
540 101 aggiorna punteggio esercizi, orologio: 9
570 110 9 3 1 PROT:9 squadra 9, quesito 3: giusto
600 101 aggiorna punteggio esercizi, orologio: 10
600 210 termine gara
--- 999 fine simulatore
";

pub const JOURNAL_R20644: &str = r"--- 001 inizializzazione simulatore
--- 002 10+0:70 7:20 4.1;1 10-2 -- squadre: 10 quesiti: 7
--- 011 10 20 15 10 8 6 5 4 3 2 1 definizione dei 10 livelli di bonus
--- 012 6 100 60 40 30 20 10 definizione dei 6 livelli di superbonus
--- 004 1 20 quesito 1 punteggio iniziale 20
--- 004 2 20 quesito 2 punteggio iniziale 20
--- 004 3 20 quesito 3 punteggio iniziale 20
--- 004 4 20 quesito 4 punteggio iniziale 20
--- 004 5 20 quesito 5 punteggio iniziale 20
--- 004 6 20 quesito 6 punteggio iniziale 20
--- 004 7 20 quesito 7 punteggio iniziale 20
--- 005 1 0 Squadra 1
--- 005 2 0 Squadra 2
--- 005 3 0 Squadra 3
--- 005 4 0 Squadra 4
--- 005 5 0 Squadra 5
--- 005 6 0 Squadra 6
--- 005 7 0 Squadra 7
--- 005 8 0 Squadra 8
--- 005 9 0 Squadra 9
--- 005 10 0 Squadra 10
00:00:00.000 200 inizio gara
00:01:00.000 101 aggiorna punteggio esercizi, orologio: 1
00:02:00.000 101 aggiorna punteggio esercizi, orologio: 2
00:03:00.000 101 aggiorna punteggio esercizi, orologio: 3
00:04:00.000 101 aggiorna punteggio esercizi, orologio: 4
00:04:03.000 120 1 2 PROT:1 squadra 1 sceglie 2 come jolly
00:04:11.000 120 2 3 PROT:2 squadra 2 sceglie 3 come jolly
00:04:19.000 120 3 4 PROT:3 squadra 3 sceglie 4 come jolly
00:05:00.000 101 aggiorna punteggio esercizi, orologio: 5
00:05:02.000 121 timeout jolly
00:05:30.000 110 5 5 1 PROT:4 squadra 5, quesito 5: giusto
00:05:41.000 110 6 6 0 PROT:5 squadra 6, quesito 6: sbagliato
00:06:00.000 101 aggiorna punteggio esercizi, orologio: 6
00:07:00.000 101 aggiorna punteggio esercizi, orologio: 7
00:07:15.000 110 2 3 1 PROT:6 squadra 2, quesito 3: giusto
00:07:30.000 110 3 4 0 PROT:7 squadra 3, quesito 4: sbagliato
00:08:00.000 101 aggiorna punteggio esercizi, orologio: 8
00:08:30.000 110 8 2 0 PROT:8 squadra 8, quesito 2: sbagliato
00:09:00.000 101 aggiorna punteggio esercizi, orologio: 9
00:09:30.000 110 9 3 1 PROT:9 squadra 9, quesito 3: giusto
00:10:00.000 101 aggiorna punteggio esercizi, orologio: 10
00:10:00.000 210 termine gara
--- 999 fine simulatore
";

pub const JOURNAL_R25013: &str = r"--- 001 inizializzazione simulatore
--- 002 10+0:70 7:20 4.1;1 10-2 -- squadre: 10 quesiti: 7
--- 011 10 20 15 10 8 6 5 4 3 2 1 definizione dei 10 livelli di bonus
--- 012 6 100 60 40 30 20 10 definizione dei 6 livelli di superbonus
--- 004 1 20 0000 quesito 1
--- 004 2 20 0000 quesito 2
--- 004 3 20 0000 quesito 3
--- 004 4 20 0000 quesito 4
--- 004 5 20 0000 quesito 5
--- 004 6 20 0000 quesito 6
--- 004 7 20 0000 quesito 7
--- 005 1 0 Squadra 1
--- 005 2 0 Squadra 2
--- 005 3 0 Squadra 3
--- 005 4 0 Squadra 4
--- 005 5 0 Squadra 5
--- 005 6 0 Squadra 6
--- 005 7 0 Squadra 7
--- 005 8 0 Squadra 8
--- 005 9 0 Squadra 9
--- 005 10 0 Squadra 10
00:00:00.000 200 inizio gara
00:01:00.000 101 aggiorna punteggio esercizi, orologio: 1
00:02:00.000 101 aggiorna punteggio esercizi, orologio: 2
00:03:00.000 101 aggiorna punteggio esercizi, orologio: 3
00:04:00.000 101 aggiorna punteggio esercizi, orologio: 4
00:04:03.000 120 1 2 PROT:1 squadra 1 sceglie 2 come jolly
00:04:11.000 120 2 3 PROT:2 squadra 2 sceglie 3 come jolly
00:04:19.000 120 3 4 PROT:3 squadra 3 sceglie 4 come jolly
00:05:00.000 101 aggiorna punteggio esercizi, orologio: 5
00:05:02.000 121 timeout jolly
00:05:30.000 110 5 5 1 PROT:4 squadra 5, quesito 5: giusto
00:05:41.000 110 6 6 0 PROT:5 squadra 6, quesito 6: sbagliato
00:06:00.000 101 aggiorna punteggio esercizi, orologio: 6
00:07:00.000 101 aggiorna punteggio esercizi, orologio: 7
00:07:15.000 110 2 3 1 PROT:6 squadra 2, quesito 3: giusto
00:07:30.000 110 3 4 0 PROT:7 squadra 3, quesito 4: sbagliato
00:08:00.000 101 aggiorna punteggio esercizi, orologio: 8
00:08:30.000 110 8 2 0 PROT:8 squadra 8, quesito 2: sbagliato
00:09:00.000 101 aggiorna punteggio esercizi, orologio: 9
00:09:30.000 110 9 3 1 PROT:9 squadra 9, quesito 3: giusto
00:10:00.000 101 aggiorna punteggio esercizi, orologio: 10
00:10:00.000 210 termine gara
--- 999 fine simulatore
";

/// Every sample journal, oldest revision first.
pub fn journals() -> Vec<(JournalVersion, &'static str)> {
    vec![
        (JournalVersion::R5539, JOURNAL_R5539),
        (JournalVersion::R11167, JOURNAL_R11167),
        (JournalVersion::R11184, JOURNAL_R11184),
        (JournalVersion::R11189, JOURNAL_R11189),
        (JournalVersion::R17497, JOURNAL_R17497),
        (JournalVersion::R17505, JOURNAL_R17505),
        (JournalVersion::R17548, JOURNAL_R17548),
        (JournalVersion::R20642, JOURNAL_R20642),
        (JournalVersion::R20644, JOURNAL_R20644),
        (JournalVersion::R25013, JOURNAL_R25013),
    ]
}

pub const RACE_NAME: &str = "sample_journal";

pub fn race_start() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2000-01-01T00:00:00+00:00").unwrap()
}
