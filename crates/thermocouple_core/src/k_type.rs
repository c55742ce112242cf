/// NIST ITS-90 K型熱電対 基準テーブル
///
/// 基準関数を -200℃ から 1370℃ まで 10℃ 刻みで評価し、1μV 単位に丸めた値。
/// (起電力[μV], 温度[℃]) の順で、どちらも単調増加。
pub const K_TYPE_BREAKPOINTS: [(f32, f32); 158] = [
    (-5891.0, -200.0), (-5730.0, -190.0), (-5550.0, -180.0), (-5354.0, -170.0),
    (-5141.0, -160.0), (-4913.0, -150.0), (-4669.0, -140.0), (-4411.0, -130.0),
    (-4138.0, -120.0), (-3852.0, -110.0), (-3554.0, -100.0), (-3243.0, -90.0),
    (-2920.0, -80.0), (-2587.0, -70.0), (-2243.0, -60.0), (-1889.0, -50.0),
    (-1527.0, -40.0), (-1156.0, -30.0), (-778.0, -20.0), (-392.0, -10.0),
    (0.0, 0.0), (397.0, 10.0), (798.0, 20.0), (1203.0, 30.0),
    (1612.0, 40.0), (2023.0, 50.0), (2436.0, 60.0), (2851.0, 70.0),
    (3267.0, 80.0), (3682.0, 90.0), (4096.0, 100.0), (4509.0, 110.0),
    (4920.0, 120.0), (5328.0, 130.0), (5735.0, 140.0), (6138.0, 150.0),
    (6540.0, 160.0), (6941.0, 170.0), (7340.0, 180.0), (7739.0, 190.0),
    (8138.0, 200.0), (8539.0, 210.0), (8940.0, 220.0), (9343.0, 230.0),
    (9747.0, 240.0), (10153.0, 250.0), (10561.0, 260.0), (10971.0, 270.0),
    (11382.0, 280.0), (11795.0, 290.0), (12209.0, 300.0), (12624.0, 310.0),
    (13040.0, 320.0), (13457.0, 330.0), (13874.0, 340.0), (14293.0, 350.0),
    (14713.0, 360.0), (15133.0, 370.0), (15554.0, 380.0), (15975.0, 390.0),
    (16397.0, 400.0), (16820.0, 410.0), (17243.0, 420.0), (17667.0, 430.0),
    (18091.0, 440.0), (18516.0, 450.0), (18941.0, 460.0), (19366.0, 470.0),
    (19792.0, 480.0), (20218.0, 490.0), (20644.0, 500.0), (21071.0, 510.0),
    (21497.0, 520.0), (21924.0, 530.0), (22350.0, 540.0), (22776.0, 550.0),
    (23203.0, 560.0), (23629.0, 570.0), (24055.0, 580.0), (24480.0, 590.0),
    (24905.0, 600.0), (25330.0, 610.0), (25755.0, 620.0), (26179.0, 630.0),
    (26602.0, 640.0), (27025.0, 650.0), (27447.0, 660.0), (27869.0, 670.0),
    (28289.0, 680.0), (28710.0, 690.0), (29129.0, 700.0), (29548.0, 710.0),
    (29965.0, 720.0), (30382.0, 730.0), (30798.0, 740.0), (31213.0, 750.0),
    (31628.0, 760.0), (32041.0, 770.0), (32453.0, 780.0), (32865.0, 790.0),
    (33275.0, 800.0), (33685.0, 810.0), (34093.0, 820.0), (34501.0, 830.0),
    (34908.0, 840.0), (35313.0, 850.0), (35718.0, 860.0), (36121.0, 870.0),
    (36524.0, 880.0), (36925.0, 890.0), (37326.0, 900.0), (37725.0, 910.0),
    (38124.0, 920.0), (38522.0, 930.0), (38918.0, 940.0), (39314.0, 950.0),
    (39708.0, 960.0), (40101.0, 970.0), (40494.0, 980.0), (40885.0, 990.0),
    (41276.0, 1000.0), (41665.0, 1010.0), (42053.0, 1020.0), (42440.0, 1030.0),
    (42826.0, 1040.0), (43211.0, 1050.0), (43595.0, 1060.0), (43978.0, 1070.0),
    (44359.0, 1080.0), (44740.0, 1090.0), (45119.0, 1100.0), (45497.0, 1110.0),
    (45873.0, 1120.0), (46249.0, 1130.0), (46623.0, 1140.0), (46995.0, 1150.0),
    (47367.0, 1160.0), (47737.0, 1170.0), (48105.0, 1180.0), (48473.0, 1190.0),
    (48838.0, 1200.0), (49202.0, 1210.0), (49565.0, 1220.0), (49926.0, 1230.0),
    (50286.0, 1240.0), (50644.0, 1250.0), (51000.0, 1260.0), (51355.0, 1270.0),
    (51708.0, 1280.0), (52060.0, 1290.0), (52410.0, 1300.0), (52759.0, 1310.0),
    (53106.0, 1320.0), (53451.0, 1330.0), (53795.0, 1340.0), (54138.0, 1350.0),
    (54479.0, 1360.0), (54819.0, 1370.0),
];
